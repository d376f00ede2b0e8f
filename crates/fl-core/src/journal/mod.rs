//! The append-only activity log.

pub mod entry;
pub mod log;

pub use entry::{LogEntry, LogKind, LogOutcome};
pub use log::Journal;
