use colored::Colorize;
use fl_core::UnlockChange;
use fl_engine::{FateSession, NoLookup};

use super::{Context, parse_table};

pub fn run_key(ctx: &Context, table: &str) -> Result<(), String> {
    let table = parse_table(table)?;
    let mut session = ctx.open()?;
    session.stage_key_unlock(table).map_err(|e| e.to_string())?;
    reveal(ctx, session)
}

pub fn run_omni(ctx: &Context, table: &str, item: &str) -> Result<(), String> {
    let table = parse_table(table)?;
    let mut session = ctx.open()?;
    session
        .stage_special_unlock(table, item)
        .map_err(|e| e.to_string())?;
    reveal(ctx, session)
}

pub fn run_chaos(ctx: &Context) -> Result<(), String> {
    let mut session = ctx.open()?;
    session.stage_chaos_unlock().map_err(|e| e.to_string())?;
    reveal(ctx, session)
}

/// Confirm the staged unlock and print the reveal.
fn reveal(ctx: &Context, mut session: FateSession) -> Result<(), String> {
    session.enrich_pending(&NoLookup);
    let (heading, item, cost, image) = match session.pending() {
        Some(p) => (p.display_type.clone(), p.item(), p.cost(), p.image.clone()),
        None => return Err("nothing was staged".into()),
    };

    let change = session.confirm_unlock().map_err(|e| e.to_string())?;
    let detail = match change {
        UnlockChange::TierRaised { from, to } => format!(" (tier {from} → {to})"),
        UnlockChange::Unlocked | UnlockChange::Unchanged => String::new(),
    };

    println!("{} {}", format!("{heading}:").dimmed(), item.yellow().bold());
    println!("  Unlocked{detail} for {cost}");
    if let Some(url) = image {
        println!("  {}", url.dimmed());
    }
    ctx.persist(&session)
}
