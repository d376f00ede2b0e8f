use fl_engine::DropSource;

use super::{Context, print_roll};

pub fn run(ctx: &Context, source: &str, times: u32) -> Result<(), String> {
    let source =
        DropSource::parse(source).ok_or_else(|| format!("unknown drop source: \"{source}\""))?;
    let mut session = ctx.open()?;
    for _ in 0..times.max(1) {
        let report = session.roll_source(source).map_err(|e| e.to_string())?;
        print_roll(&report);
    }
    ctx.persist(&session)
}

pub fn run_custom(ctx: &Context, label: &str, threshold: u32) -> Result<(), String> {
    let mut session = ctx.open()?;
    let report = session.roll(label, threshold).map_err(|e| e.to_string())?;
    print_roll(&report);
    ctx.persist(&session)
}
