//! Error types for the reward and unlock engine.
//!
//! Every variant except the storage, lookup, and core wrappers is a refused
//! precondition: the operation was rejected before any state changed.

use fl_core::TableKind;
use thiserror::Error;

use crate::lookup::LookupError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while playing.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Not enough Keys for the requested spend.
    #[error("not enough Keys: need {needed}, have {available}")]
    InsufficientKeys {
        /// Keys required.
        needed: u32,
        /// Keys held.
        available: u32,
    },

    /// No Omni-Key to spend.
    #[error("no Omni-Keys available")]
    InsufficientSpecialKeys,

    /// No Chaos Key to spend.
    #[error("no Chaos Keys available")]
    InsufficientChaosKeys,

    /// A ritual's Fate Point cost is not met.
    #[error("the Ritual of {ritual} needs {needed} Fate Points, you have {available}")]
    InsufficientFatePoints {
        /// Ritual name.
        ritual: String,
        /// Fate Points required.
        needed: u32,
        /// Fate Points held.
        available: u32,
    },

    /// A buff is already waiting for the next roll.
    #[error("the {0} buff is already active")]
    BuffAlreadyActive(String),

    /// Every item in the table is already unlocked or maxed.
    #[error("nothing left to unlock in {0}")]
    TableExhausted(TableKind),

    /// The only skills left need tiers 8-10, which cost 2 Keys.
    #[error("you need 2 Keys to unlock higher skill tiers")]
    TierNeedsTwoKeys,

    /// No table anywhere has an eligible item.
    #[error("the void is silent: there is nothing left to unlock")]
    NothingLeftToUnlock,

    /// The named item is not part of the table.
    #[error("{table} has no item called \"{item}\"")]
    UnknownItem {
        /// Table searched.
        table: TableKind,
        /// Item name given.
        item: String,
    },

    /// The item exists but is already unlocked or maxed.
    #[error("{item} is already fully unlocked in {table}")]
    ItemNotEligible {
        /// Table of the item.
        table: TableKind,
        /// Item name.
        item: String,
    },

    /// The named skill does not exist.
    #[error("unknown skill: \"{0}\"")]
    UnknownSkill(String),

    /// The skill has not been unlocked yet.
    #[error("{0} is locked: unlock its first tier before levelling")]
    SkillLocked(String),

    /// Unknown drop source label.
    #[error("unknown drop source: \"{0}\"")]
    UnknownSource(String),

    /// A roll threshold outside 1-100.
    #[error("invalid threshold {0}: must be between 1 and 100")]
    InvalidThreshold(u32),

    /// A ritual name did not parse.
    #[error("unknown ritual: \"{0}\"")]
    UnknownRitual(String),

    /// An unlock is already staged and waiting for confirmation.
    #[error("an unlock of {0} is already waiting to be revealed")]
    UnlockAlreadyPending(String),

    /// Nothing is staged to confirm.
    #[error("no unlock is waiting to be revealed")]
    NoPendingUnlock,

    /// A stats sync found nothing new.
    #[error("no new levels or collection log slots found to sync")]
    NothingToSync,

    /// A remote lookup failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Reading or writing the save failed.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Core data error.
    #[error(transparent)]
    Core(#[from] fl_core::CoreError),
}
