use comfy_table::{ContentArrangement, Table};
use fl_engine::DropSource;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Source", "Key chance", "Omni-Key chance"]);

    for source in DropSource::all() {
        table.add_row(vec![
            source.label().to_string(),
            format!("{}%", source.threshold()),
            format!("{}%", source.rare_chance()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  Skill levels roll at ceil(level / 3)%.");
    Ok(())
}
