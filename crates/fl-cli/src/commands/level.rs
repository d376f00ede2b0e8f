use colored::Colorize;
use fl_engine::LevelUp;

use super::{Context, print_roll};

pub fn run(ctx: &Context, skill: &str, times: u32) -> Result<(), String> {
    let mut session = ctx.open()?;
    for _ in 0..times.max(1) {
        match session.level_up(skill).map_err(|e| e.to_string())? {
            LevelUp::Raised(report) => {
                println!("{} reached level {}", report.skill.bold(), report.level);
                print_roll(&report.roll);
                if let Some(total) = report.milestone {
                    println!(
                        "  {} total level {total}: +1 Chaos Key",
                        "Milestone!".cyan().bold()
                    );
                }
            }
            LevelUp::AtCap { level } => {
                println!("{skill} is capped at level {level}; unlock its next tier first");
                break;
            }
        }
    }
    ctx.persist(&session)
}
