//! The single ritual buff slot.

use serde::{Deserialize, Serialize};

/// A buff that modifies the next roll attempt only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RitualBuff {
    /// No buff active.
    #[default]
    None,
    /// Roll twice and keep the lower draw.
    Luck,
    /// Double the Keys from a successful roll.
    Greed,
}

impl RitualBuff {
    /// Read a persisted buff value. Anything unrecognised, including the
    /// retired `PRESERVE` buff, becomes `None`.
    pub fn from_persisted(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "LUCK" => Self::Luck,
            "GREED" => Self::Greed,
            _ => Self::None,
        }
    }

    /// Value written to the persisted document.
    pub fn persisted(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Luck => "LUCK",
            Self::Greed => "GREED",
        }
    }

    /// Whether a buff occupies the slot.
    pub fn is_active(self) -> bool {
        self != Self::None
    }

    /// Empty the slot, returning what was in it.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl std::fmt::Display for RitualBuff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Luck => write!(f, "Clarity"),
            Self::Greed => write!(f, "Greed"),
        }
    }
}
