use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let session = ctx.open()?;
    let stats = session.statistics();

    if stats.total_rolls == 0 {
        println!("  No rolls yet.");
        return Ok(());
    }

    let deviation = stats.luck_deviation();
    let verdict = if deviation >= 0.0 {
        format!("{deviation:.2} more Keys than average").green()
    } else {
        let shortfall = -deviation;
        format!("{shortfall:.2} fewer Keys than average").red()
    };
    println!("Luck: {verdict}");
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Statistic", "Value"]);
    table.add_row(vec!["Total rolls".to_string(), stats.total_rolls.to_string()]);
    table.add_row(vec!["Keys found".to_string(), stats.successes.to_string()]);
    table.add_row(vec![
        "Expected Keys".to_string(),
        format!("{:.2}", stats.expected_successes),
    ]);
    table.add_row(vec![
        "Luck percentage".to_string(),
        format!("{:+.1}%", stats.luck_percent()),
    ]);
    table.add_row(vec!["Pity Keys".to_string(), stats.pity_keys.to_string()]);
    table.add_row(vec![
        "Longest dry streak".to_string(),
        stats.longest_dry_streak.to_string(),
    ]);
    table.add_row(vec![
        "Current dry streak".to_string(),
        stats.current_dry_streak.to_string(),
    ]);
    println!("{table}");
    Ok(())
}
