use std::path::Path;

use super::Context;

pub fn run(ctx: &Context, format: &str, output: Option<&Path>) -> Result<(), String> {
    let session = ctx.open()?;

    let content = match format.to_lowercase().as_str() {
        "json" => session.export_json().map_err(|e| e.to_string())?,
        "markdown" | "md" => session.state().journal.export_markdown(),
        "text" | "txt" => session.state().journal.export_text(),
        _ => {
            return Err(format!(
                "unknown format '{format}'. Supported: json, markdown, text"
            ));
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, &content)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => print!("{content}"),
    }

    Ok(())
}
