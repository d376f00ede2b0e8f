use std::path::{Path, PathBuf};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use fl_engine::{LookupError, StatsSnapshot, StatsSource, SyncPlan};

use super::{Context, print_roll};

/// Stats read from a local JSON snapshot instead of the hiscores.
struct SnapshotFile {
    path: PathBuf,
}

impl StatsSource for SnapshotFile {
    fn fetch(&self, _player: &str) -> Result<StatsSnapshot, LookupError> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| LookupError::Unavailable(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&text).map_err(|e| LookupError::Malformed(e.to_string()))
    }
}

pub fn run(ctx: &Context, player: &str, snapshot: &Path, confirm: bool) -> Result<(), String> {
    let source = SnapshotFile {
        path: snapshot.to_path_buf(),
    };
    let mut session = ctx.open()?;

    let diff = match session
        .prepare_sync(&source, player)
        .map_err(|e| e.to_string())?
    {
        SyncPlan::Baseline => {
            println!("Recorded baseline stats for {}.", player.bold());
            println!("  Future syncs roll for progress made from here.");
            return ctx.persist(&session);
        }
        SyncPlan::Changes(diff) => diff,
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Progress", "From", "To", "Rolls"]);
    for gain in &diff.levels {
        table.add_row(vec![
            gain.skill.to_string(),
            gain.from.to_string(),
            gain.to.to_string(),
            (gain.to - gain.from).to_string(),
        ]);
    }
    if diff.collection_log > 0 {
        table.add_row(vec![
            "Collection Log".to_string(),
            String::new(),
            String::new(),
            diff.collection_log.to_string(),
        ]);
    }
    println!("{table}");

    if !confirm {
        println!(
            "  {} rolls pending. Run again with --confirm to roll them.",
            diff.roll_count()
        );
        return Ok(());
    }

    let report = session.confirm_sync().map_err(|e| e.to_string())?;
    for roll in &report.rolls {
        print_roll(roll);
    }
    println!();
    println!(
        "Synced {}: {} rolls, +{} Keys, +{} Omni-Keys",
        player.bold(),
        report.rolls.len(),
        report.keys_gained,
        report.special_keys_gained
    );
    ctx.persist(&session)
}
