use super::Context;

pub fn run(ctx: &Context, yes: bool) -> Result<(), String> {
    if !yes {
        return Err("reset discards all progress; pass --yes to confirm".into());
    }
    let mut session = ctx.open()?;
    session.reset();
    ctx.persist(&session)?;
    println!("Progress reset. You start again with {} Keys.", session.state().wallet.keys());
    Ok(())
}
