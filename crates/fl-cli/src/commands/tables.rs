use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use fl_core::{TableKind, UnlockRecord};

use super::{Context, parse_table};

pub fn run(ctx: &Context, table: Option<&str>) -> Result<(), String> {
    let session = ctx.open()?;
    let unlocks = &session.state().unlocks;

    match table {
        Some(name) => items(unlocks, parse_table(name)?),
        None => overview(unlocks),
    }
    Ok(())
}

fn overview(unlocks: &UnlockRecord) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Table", "Progress", "Open"]);
    for kind in TableKind::all() {
        let (done, total) = unlocks.progress(*kind);
        let open = if unlocks.can_unlock(*kind) {
            "yes".green().to_string()
        } else {
            "complete".dimmed().to_string()
        };
        table.add_row(vec![kind.to_string(), format!("{done}/{total}"), open]);
    }
    println!("{table}");
}

fn items(unlocks: &UnlockRecord, kind: TableKind) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if kind.is_tiered() {
        let max = kind.max_tier().unwrap_or_default();
        if kind == TableKind::Skills {
            table.set_header(vec!["Skill", "Tier", "Level", "Cap"]);
        } else {
            table.set_header(vec!["Slot", "Tier"]);
        }
        for item in kind.items() {
            let tier = format!("{}/{max}", unlocks.tier(kind, item));
            let mut row = vec![item.to_string(), tier];
            if kind == TableKind::Skills {
                row.push(unlocks.level(item).to_string());
                row.push(unlocks.skill_cap(item).to_string());
            }
            table.add_row(row);
        }
    } else {
        table.set_header(vec![kind.to_string(), String::new()]);
        for item in kind.items() {
            let mark = if unlocks.is_unlocked(kind, item) {
                "✓".green().to_string()
            } else {
                String::new()
            };
            table.add_row(vec![item.to_string(), mark]);
        }
    }
    println!("{table}");
}
