//! Fate Points: the pity counter.
//!
//! Every failed roll accrues one point. The counter never rests at 50: the
//! failure that would reach 50 resets it to 0 and grants a pity Key instead.

use serde::{Deserialize, Serialize};

/// Number of accrued failures that converts into a pity Key.
pub const PITY_THRESHOLD: u32 = 50;

/// Result of recording one failed roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FateTick {
    /// The counter grew to the contained value.
    Accrued(u32),
    /// The counter hit the threshold and was reset to 0.
    Pity,
}

/// Accumulated Fate Points, always in `[0, 50)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FatePoints {
    value: u32,
}

impl FatePoints {
    /// Create a counter, clamped below the pity threshold.
    pub fn new(value: u32) -> Self {
        Self {
            value: value.min(PITY_THRESHOLD - 1),
        }
    }

    /// Current number of points.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Record a failed roll.
    pub fn record_failure(&mut self) -> FateTick {
        let next = self.value + 1;
        if next >= PITY_THRESHOLD {
            self.value = 0;
            FateTick::Pity
        } else {
            self.value = next;
            FateTick::Accrued(next)
        }
    }

    /// Reset to 0 after a successful roll.
    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Spend `cost` points. Returns false, leaving the counter untouched,
    /// when there are not enough.
    pub fn spend(&mut self, cost: u32) -> bool {
        match self.value.checked_sub(cost) {
            Some(rest) => {
                self.value = rest;
                true
            }
            None => false,
        }
    }
}
