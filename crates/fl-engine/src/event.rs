//! Notifications for a presentation layer.
//!
//! The session queues one event per state change; a front end drains them
//! to drive feedback such as toasts or animations.

use fl_core::{TableKind, UnlockChange};
use uuid::Uuid;

use crate::ritual::Ritual;
use crate::roll::RollOutcome;

/// Something that happened in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A roll was resolved.
    RollResolved {
        /// Activity label.
        source: String,
        /// Effective roll.
        roll: u32,
        /// Threshold.
        threshold: u32,
        /// Outcome.
        outcome: RollOutcome,
    },
    /// A ritual was performed.
    RitualPerformed(Ritual),
    /// A skill gained a level.
    LevelRaised {
        /// Skill name.
        skill: String,
        /// New level.
        level: u32,
    },
    /// The total level crossed a milestone.
    MilestoneReached(u32),
    /// An unlock was staged for reveal.
    UnlockStaged {
        /// Pending unlock id.
        id: Uuid,
        /// Table.
        table: TableKind,
        /// Item.
        item: String,
    },
    /// The pending unlock's image arrived.
    ImageResolved(Uuid),
    /// An unlock was paid for and applied.
    UnlockCommitted {
        /// Table.
        table: TableKind,
        /// Item.
        item: String,
        /// What changed.
        change: UnlockChange,
    },
    /// A stats sync recorded a baseline or replayed gains.
    SyncCompleted {
        /// Rolls made by the sync.
        rolls: usize,
    },
    /// The whole state was replaced by a reset or an import.
    StateReplaced,
}
