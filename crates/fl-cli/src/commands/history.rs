use super::{Context, format_entry};

pub fn run(ctx: &Context, limit: usize) -> Result<(), String> {
    let session = ctx.open()?;
    let journal = &session.state().journal;

    if journal.is_empty() {
        println!("  The log is empty.");
        return Ok(());
    }

    for entry in journal.recent(limit).iter().rev() {
        println!("{}", format_entry(entry));
    }
    if journal.len() > limit {
        println!();
        println!("  ({} older entries not shown)", journal.len() - limit);
    }
    Ok(())
}
