//! Reward and unlock engine for Fatelock.
//!
//! Rolls for Keys against the drop-source rate table, tracks Fate Points
//! pity, runs altar rituals, and draws unlocks from the content tables.
//! All randomness goes through the [`Draw`] trait, and all state changes go
//! through a single [`FateSession`].

pub mod config;
pub mod draw;
pub mod error;
pub mod event;
pub mod level;
pub mod lookup;
pub mod rates;
pub mod ritual;
pub mod roll;
pub mod session;
pub mod stats;
pub mod store;
pub mod sync;
pub mod unlock;

pub use config::EngineConfig;
pub use draw::{Draw, RngDraw, ScriptedDraw};
pub use error::{EngineError, EngineResult};
pub use event::GameEvent;
pub use level::{LevelUp, LevelUpReport};
pub use lookup::{ImageLookup, LookupError, NoLookup, StatsSource};
pub use rates::DropSource;
pub use ritual::{Ritual, RitualCost, RitualEffect};
pub use roll::{RollOutcome, RollReport};
pub use session::FateSession;
pub use stats::Statistics;
pub use store::{FileStore, MemoryStore, StateStore};
pub use sync::{StatsSnapshot, SyncDiff, SyncPlan, SyncReport};
pub use unlock::{PendingUnlock, Selection, UnlockCost};
