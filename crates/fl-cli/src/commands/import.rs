use std::path::Path;

use super::Context;

pub fn run(ctx: &Context, file: &Path) -> Result<(), String> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| format!("failed to read {}: {e}", file.display()))?;
    let mut session = ctx.open()?;
    session
        .import_json(&text)
        .map_err(|e| format!("import failed, save left unchanged: {e}"))?;
    ctx.persist(&session)?;

    let state = session.state();
    println!(
        "Imported {}: {} Keys, {} log entries",
        file.display(),
        state.wallet.keys(),
        state.journal.len()
    );
    Ok(())
}
