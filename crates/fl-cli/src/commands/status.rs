use colored::Colorize;
use fl_core::RitualBuff;
use fl_engine::Ritual;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let session = ctx.open()?;
    let state = session.state();
    let wallet = &state.wallet;

    println!("{}", "Fatelock".bold());
    println!("  Keys:          {}", wallet.keys().to_string().yellow().bold());
    println!("  Omni-Keys:     {}", wallet.special_keys().to_string().magenta().bold());
    println!("  Chaos Keys:    {}", wallet.chaos_keys().to_string().cyan().bold());
    println!("  Fate Points:   {}/50", wallet.fate.value());

    let buff = match state.buff {
        RitualBuff::None => "none".dimmed(),
        active => active.to_string().green().bold(),
    };
    println!("  Active buff:   {buff}");
    println!("  Total level:   {}", state.unlocks.total_level());

    let ready: Vec<String> = Ritual::all()
        .iter()
        .filter(|r| r.is_affordable(state))
        .map(|r| r.to_string())
        .collect();
    if !ready.is_empty() {
        println!("  Rituals ready: {}", ready.join(", "));
    }
    Ok(())
}
