//! Altar rituals.
//!
//! Clarity and Greed fill the buff slot for the next roll. Chaos and
//! Transmutation resolve immediately into currency. Each ritual checks its
//! preconditions first and only then applies, so a refused ritual changes
//! nothing.

use std::fmt;

use fl_core::{Currency, GameState, LogEntry, RitualBuff};
use log::info;

use crate::error::{EngineError, EngineResult};

/// Fate Points spent on the Ritual of Clarity.
pub const CLARITY_COST: u32 = 15;
/// Fate Points spent on the Ritual of Greed.
pub const GREED_COST: u32 = 20;
/// Fate Points spent on the Ritual of Chaos.
pub const CHAOS_COST: u32 = 25;
/// Keys fused by the Ritual of Transmutation.
pub const TRANSMUTE_COST: u32 = 5;

/// A ritual the player can perform at the altar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ritual {
    /// Next roll is drawn twice, keeping the lower value.
    Clarity,
    /// Next successful roll pays double Keys.
    Greed,
    /// Converts Fate Points into a Chaos Key.
    Chaos,
    /// Fuses Keys into an Omni-Key.
    Transmutation,
}

/// What a ritual costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RitualCost {
    /// Paid in Fate Points.
    FatePoints(u32),
    /// Paid in Keys.
    Keys(u32),
}

/// What a performed ritual produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RitualEffect {
    /// The buff slot now holds this buff.
    Buff(RitualBuff),
    /// A currency was credited.
    Credited(Currency),
}

impl Ritual {
    /// All rituals, in altar order.
    pub fn all() -> &'static [Self] {
        &[Self::Clarity, Self::Greed, Self::Chaos, Self::Transmutation]
    }

    /// Parse a ritual name. `luck` and `transmute` are accepted too.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clarity" | "luck" => Some(Self::Clarity),
            "greed" => Some(Self::Greed),
            "chaos" => Some(Self::Chaos),
            "transmutation" | "transmute" => Some(Self::Transmutation),
            _ => None,
        }
    }

    /// Cost of performing this ritual.
    pub fn cost(self) -> RitualCost {
        match self {
            Self::Clarity => RitualCost::FatePoints(CLARITY_COST),
            Self::Greed => RitualCost::FatePoints(GREED_COST),
            Self::Chaos => RitualCost::FatePoints(CHAOS_COST),
            Self::Transmutation => RitualCost::Keys(TRANSMUTE_COST),
        }
    }

    /// Whether the state can pay for this ritual right now.
    pub fn is_affordable(self, state: &GameState) -> bool {
        self.check(state).is_ok()
    }

    /// Perform the ritual against `state`.
    pub fn perform(self, state: &mut GameState) -> EngineResult<RitualEffect> {
        self.check(state)?;

        let effect = match self {
            Self::Clarity => {
                state.wallet.fate.spend(CLARITY_COST);
                state.buff = RitualBuff::Luck;
                RitualEffect::Buff(RitualBuff::Luck)
            }
            Self::Greed => {
                state.wallet.fate.spend(GREED_COST);
                state.buff = RitualBuff::Greed;
                RitualEffect::Buff(RitualBuff::Greed)
            }
            Self::Chaos => {
                state.wallet.fate.spend(CHAOS_COST);
                state.wallet.credit(Currency::ChaosKey, 1);
                RitualEffect::Credited(Currency::ChaosKey)
            }
            Self::Transmutation => {
                state.wallet.debit(Currency::Key, TRANSMUTE_COST);
                state.wallet.credit(Currency::SpecialKey, 1);
                RitualEffect::Credited(Currency::SpecialKey)
            }
        };

        state
            .journal
            .append(LogEntry::ritual(self.log_message()).with_details(self.log_details()));
        info!("performed the Ritual of {self}");
        Ok(effect)
    }

    fn check(self, state: &GameState) -> EngineResult<()> {
        match self.cost() {
            RitualCost::FatePoints(needed) => {
                if matches!(self, Self::Clarity | Self::Greed) && state.buff.is_active() {
                    return Err(EngineError::BuffAlreadyActive(state.buff.to_string()));
                }
                let available = state.wallet.fate.value();
                if available < needed {
                    return Err(EngineError::InsufficientFatePoints {
                        ritual: self.to_string(),
                        needed,
                        available,
                    });
                }
            }
            RitualCost::Keys(needed) => {
                let available = state.wallet.keys();
                if available < needed {
                    return Err(EngineError::InsufficientKeys { needed, available });
                }
            }
        }
        Ok(())
    }

    fn log_message(self) -> &'static str {
        match self {
            Self::Clarity => "Ritual of Clarity Performed",
            Self::Greed => "Ritual of Greed Performed",
            Self::Chaos => "Ritual of Chaos Performed",
            Self::Transmutation => "Ritual of Transmutation Complete",
        }
    }

    fn log_details(self) -> &'static str {
        match self {
            Self::Clarity => "Next roll will use Advantage (roll twice).",
            Self::Greed => {
                "Next roll will yield Double Keys if successful. Consumed on next attempt."
            }
            Self::Chaos => "Manifested 25 Fate Points into a Chaos Key.",
            Self::Transmutation => "Fused 5 Keys into 1 Omni-Key.",
        }
    }
}

impl fmt::Display for Ritual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clarity => write!(f, "Clarity"),
            Self::Greed => write!(f, "Greed"),
            Self::Chaos => write!(f, "Chaos"),
            Self::Transmutation => write!(f, "Transmutation"),
        }
    }
}

impl fmt::Display for RitualCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FatePoints(n) => write!(f, "{n} Fate Points"),
            Self::Keys(n) => write!(f, "{n} Keys"),
        }
    }
}
