//! The game-state aggregate.

use std::collections::BTreeMap;

use crate::buff::RitualBuff;
use crate::currency::Wallet;
use crate::journal::Journal;
use crate::unlocks::UnlockRecord;

/// Keys a fresh game starts with.
pub const STARTING_KEYS: u32 = 3;

/// What the last stats sync saw for a player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncProfile {
    /// Player name used for the stats lookup.
    pub player: Option<String>,
    /// Skill levels as of the last sync.
    pub tracked_levels: BTreeMap<String, u32>,
    /// Collection-log score as of the last sync.
    pub tracked_collection_log: Option<u32>,
}

impl SyncProfile {
    /// Whether a previous sync recorded a baseline.
    pub fn has_baseline(&self) -> bool {
        !self.tracked_levels.is_empty() || self.tracked_collection_log.is_some()
    }
}

/// Everything that is saved: currencies, the buff slot, unlocks, the log,
/// and the sync baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Currency balances and Fate Points.
    pub wallet: Wallet,
    /// The active ritual buff.
    pub buff: RitualBuff,
    /// Unlock progress.
    pub unlocks: UnlockRecord,
    /// Activity log.
    pub journal: Journal,
    /// Stats-sync baseline.
    pub sync: SyncProfile,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(STARTING_KEYS)
    }
}

impl GameState {
    /// A fresh game holding `starting_keys` Keys.
    pub fn new(starting_keys: u32) -> Self {
        Self {
            wallet: Wallet::with_keys(starting_keys),
            buff: RitualBuff::None,
            unlocks: UnlockRecord::new(),
            journal: Journal::new(),
            sync: SyncProfile::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let state = GameState::default();
        assert_eq!(state.wallet.keys(), 3);
        assert_eq!(state.wallet.fate.value(), 0);
        assert_eq!(state.buff, RitualBuff::None);
        assert!(state.journal.is_empty());
        assert!(!state.sync.has_baseline());
    }
}
