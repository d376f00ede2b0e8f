//! Core types for Fatelock, a progress-gated unlock tracker.
//!
//! Provides the content catalog, the currency wallet and Fate Points pity
//! counter, the ritual buff slot, per-table unlock progress, the activity
//! journal, and the persisted save document with legacy migration.

pub mod buff;
pub mod catalog;
pub mod currency;
pub mod document;
pub mod error;
pub mod fate;
pub mod journal;
pub mod state;
pub mod unlocks;

pub use buff::RitualBuff;
pub use catalog::TableKind;
pub use currency::{Currency, Wallet};
pub use error::{CoreError, CoreResult};
pub use fate::{FatePoints, FateTick};
pub use journal::{Journal, LogEntry, LogKind, LogOutcome};
pub use state::{GameState, SyncProfile};
pub use unlocks::{UnlockChange, UnlockRecord};
