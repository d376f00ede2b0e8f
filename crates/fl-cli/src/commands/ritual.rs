use colored::Colorize;
use fl_engine::{Ritual, RitualEffect};

use super::Context;

pub fn run(ctx: &Context, name: &str) -> Result<(), String> {
    let ritual = Ritual::parse(name).ok_or_else(|| {
        format!("unknown ritual \"{name}\" (expected clarity, greed, chaos, or transmutation)")
    })?;
    let mut session = ctx.open()?;
    let effect = session.perform_ritual(ritual).map_err(|e| e.to_string())?;

    let result = match effect {
        RitualEffect::Buff(buff) => format!("{buff} will shape your next roll"),
        RitualEffect::Credited(currency) => format!("+1 {currency}"),
    };
    println!(
        "{} ({}): {}",
        format!("Ritual of {ritual}").bold(),
        ritual.cost(),
        result.green()
    );
    ctx.persist(&session)
}
