//! Roll resolution.
//!
//! A roll draws a d100 and succeeds when the effective value is at or under
//! the threshold. Lower is better, so Clarity keeps the smaller of two
//! draws. A success resets Fate Points and pays a Key, or an Omni-Key when
//! the rare sub-roll hits. A failure accrues a Fate Point and may trigger
//! the pity Key.

use fl_core::{Currency, FateTick, GameState, LogEntry, LogOutcome, RitualBuff};
use log::debug;

use crate::draw::Draw;
use crate::error::{EngineError, EngineResult};
use crate::rates::rare_chance_for_label;

/// Sides on the roll die.
pub const ROLL_SIDES: u32 = 100;

/// How a roll turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    /// Keys were credited (2 under Greed).
    Success {
        /// Keys credited.
        keys: u32,
    },
    /// The rare sub-roll hit: one Omni-Key.
    Rare,
    /// The roll missed.
    Fail {
        /// Fate Points after the miss.
        fate_points: u32,
    },
    /// The roll missed and Fate took pity: one Key, Fate Points reset.
    Pity,
}

impl RollOutcome {
    /// Whether the roll itself met its threshold.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success { .. } | Self::Rare)
    }
}

/// Everything a resolved roll did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollReport {
    /// Activity label.
    pub source: String,
    /// Success threshold.
    pub threshold: u32,
    /// The effective roll.
    pub roll: u32,
    /// The second draw made under Clarity.
    pub advantage: Option<u32>,
    /// The buff this roll consumed.
    pub consumed: RitualBuff,
    /// Outcome.
    pub outcome: RollOutcome,
}

/// Resolve one roll for `source` against `threshold` (1-100), logging it.
pub fn resolve(
    state: &mut GameState,
    draw: &mut dyn Draw,
    source: &str,
    threshold: u32,
) -> EngineResult<RollReport> {
    if !(1..=ROLL_SIDES).contains(&threshold) {
        return Err(EngineError::InvalidThreshold(threshold));
    }

    let first = draw.draw(ROLL_SIDES);
    let consumed = state.buff.take();
    let (roll, advantage) = match consumed {
        RitualBuff::Luck => {
            let second = draw.draw(ROLL_SIDES);
            (first.min(second), Some(second))
        }
        RitualBuff::Greed | RitualBuff::None => (first, None),
    };
    let greedy = consumed == RitualBuff::Greed;

    let roll_message = match advantage {
        Some(second) => format!(
            "Clarity Ritual! Rolled {} & {roll} (Took {roll})",
            first.max(second)
        ),
        None => format!("Rolled {roll}"),
    };
    debug!("{source}: rolled {roll} against {threshold} (buff {consumed})");

    let outcome = if roll <= threshold {
        let rare_chance = rare_chance_for_label(source);
        let rare = draw.draw(ROLL_SIDES) <= rare_chance;
        state.wallet.fate.reset();

        if rare {
            state.wallet.credit(Currency::SpecialKey, 1);
            let odds = (100.0 / f64::from(rare_chance)).round();
            state.journal.append(
                LogEntry::roll(
                    source,
                    LogOutcome::Rare,
                    roll,
                    threshold,
                    "LEGENDARY DROP! You found an Omni-Key!",
                )
                .with_details(format!(
                    "{roll_message}. Critical Success! (1 in {odds} chance)"
                )),
            );
            RollOutcome::Rare
        } else {
            let keys = if greedy { 2 } else { 1 };
            state.wallet.credit(Currency::Key, keys);
            let extra = if greedy { " (Doubled by Greed!)" } else { "" };
            state.journal.append(
                LogEntry::roll(
                    source,
                    LogOutcome::Success,
                    roll,
                    threshold,
                    format!("Key Found!{extra} {roll_message} (needed ≤ {threshold})"),
                )
                .with_details("Fate points reset to 0."),
            );
            RollOutcome::Success { keys }
        }
    } else {
        match state.wallet.fate.record_failure() {
            FateTick::Pity => {
                state.wallet.credit(Currency::Key, 1);
                state.journal.append(
                    LogEntry::roll(
                        source,
                        LogOutcome::Fail,
                        roll,
                        threshold,
                        format!("No Key. {roll_message} (needed ≤ {threshold})"),
                    )
                    .with_details("MAX FATE REACHED! Pity Key granted."),
                );
                state.journal.append(
                    LogEntry::pity("The Fates take pity on you.").with_details("+1 Key Added"),
                );
                RollOutcome::Pity
            }
            FateTick::Accrued(fate_points) => {
                let wasted = if greedy { " (Greed Ritual Wasted!)" } else { "" };
                state.journal.append(
                    LogEntry::roll(
                        source,
                        LogOutcome::Fail,
                        roll,
                        threshold,
                        format!("No Key.{wasted} {roll_message} (needed ≤ {threshold})"),
                    )
                    .with_details(format!("Fate Points: {fate_points}/50")),
                );
                RollOutcome::Fail { fate_points }
            }
        }
    };

    Ok(RollReport {
        source: source.to_string(),
        threshold,
        roll,
        advantage,
        consumed,
        outcome,
    })
}
