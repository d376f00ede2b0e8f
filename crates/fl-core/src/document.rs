//! The persisted save document.
//!
//! The document is one JSON object holding the whole game. Reading is
//! tolerant: missing fields fall back to the starting state, and three
//! legacy shapes are migrated:
//!
//! - a retired buff value (`PRESERVE`) becomes no buff,
//! - a merged `content` list is split into Bosses and Minigames by catalog
//!   membership,
//! - a `power` table is read as Arcana.
//!
//! Anything that is not a JSON object of this shape is rejected as a whole.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::buff::RitualBuff;
use crate::catalog::TableKind;
use crate::currency::Wallet;
use crate::error::CoreResult;
use crate::fate::FatePoints;
use crate::journal::{Journal, LogEntry};
use crate::state::{GameState, STARTING_KEYS, SyncProfile};
use crate::unlocks::UnlockRecord;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SaveDocument {
    keys: Option<u32>,
    special_keys: Option<u32>,
    chaos_keys: Option<u32>,
    fate_points: Option<u32>,
    active_buff: Option<String>,
    unlocks: Option<UnlockDocument>,
    history: Option<Vec<LogEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rsn: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    tracked_levels: BTreeMap<String, u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tracked_collection_log: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct UnlockDocument {
    equipment: BTreeMap<String, u32>,
    skills: BTreeMap<String, u32>,
    levels: BTreeMap<String, u32>,
    regions: Vec<String>,
    mobility: Vec<String>,
    arcana: Vec<String>,
    housing: Vec<String>,
    merchants: Vec<String>,
    minigames: Vec<String>,
    bosses: Vec<String>,
    storage: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    power: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<Vec<String>>,
}

impl UnlockDocument {
    fn list(&self, table: TableKind) -> &[String] {
        match table {
            TableKind::Regions => &self.regions,
            TableKind::Mobility => &self.mobility,
            TableKind::Arcana => &self.arcana,
            TableKind::Housing => &self.housing,
            TableKind::Merchants => &self.merchants,
            TableKind::Minigames => &self.minigames,
            TableKind::Bosses => &self.bosses,
            TableKind::Storage => &self.storage,
            TableKind::Skills | TableKind::Equipment => &[],
        }
    }

    fn list_mut(&mut self, table: TableKind) -> Option<&mut Vec<String>> {
        match table {
            TableKind::Regions => Some(&mut self.regions),
            TableKind::Mobility => Some(&mut self.mobility),
            TableKind::Arcana => Some(&mut self.arcana),
            TableKind::Housing => Some(&mut self.housing),
            TableKind::Merchants => Some(&mut self.merchants),
            TableKind::Minigames => Some(&mut self.minigames),
            TableKind::Bosses => Some(&mut self.bosses),
            TableKind::Storage => Some(&mut self.storage),
            TableKind::Skills | TableKind::Equipment => None,
        }
    }

    fn into_record(self) -> UnlockRecord {
        let mut record = UnlockRecord::new();

        for (table, tiers) in [
            (TableKind::Skills, &self.skills),
            (TableKind::Equipment, &self.equipment),
        ] {
            for (item, tier) in tiers {
                if table.contains(item) {
                    record.restore_tier(table, item, *tier);
                } else {
                    debug!("dropping unknown {table} entry \"{item}\"");
                }
            }
        }

        for (skill, level) in &self.levels {
            if TableKind::Skills.contains(skill) {
                record.restore_level(skill, *level);
            }
        }

        for table in TableKind::all().iter().copied().filter(|t| !t.is_tiered()) {
            for item in self.list(table) {
                record.restore_unlocked(table, item);
            }
        }

        if let Some(power) = &self.power {
            for item in power {
                record.restore_unlocked(TableKind::Arcana, item);
            }
        }

        if let Some(content) = &self.content {
            for item in content {
                if TableKind::Bosses.contains(item) {
                    record.restore_unlocked(TableKind::Bosses, item);
                } else if TableKind::Minigames.contains(item) {
                    record.restore_unlocked(TableKind::Minigames, item);
                } else {
                    debug!("dropping legacy content entry \"{item}\"");
                }
            }
        }

        record
    }

    fn from_record(record: &UnlockRecord) -> Self {
        let mut doc = Self {
            skills: record.tiers(TableKind::Skills).cloned().unwrap_or_default(),
            equipment: record
                .tiers(TableKind::Equipment)
                .cloned()
                .unwrap_or_default(),
            levels: record.levels().clone(),
            ..Self::default()
        };
        for table in TableKind::all().iter().copied() {
            if let Some(list) = doc.list_mut(table) {
                *list = record.unlocked(table).to_vec();
            }
        }
        doc
    }
}

impl SaveDocument {
    fn into_state(self) -> GameState {
        let fate = FatePoints::new(self.fate_points.unwrap_or(0));
        let wallet = Wallet::from_parts(
            self.keys.unwrap_or(STARTING_KEYS),
            self.special_keys.unwrap_or(0),
            self.chaos_keys.unwrap_or(0),
            fate,
        );
        let buff = self
            .active_buff
            .as_deref()
            .map(RitualBuff::from_persisted)
            .unwrap_or_default();
        let unlocks = self
            .unlocks
            .map(UnlockDocument::into_record)
            .unwrap_or_default();
        let journal = Journal::from_entries(self.history.unwrap_or_default());
        let sync = SyncProfile {
            player: self.rsn,
            tracked_levels: self.tracked_levels,
            tracked_collection_log: self.tracked_collection_log,
        };

        GameState {
            wallet,
            buff,
            unlocks,
            journal,
            sync,
        }
    }

    fn from_state(state: &GameState) -> Self {
        Self {
            keys: Some(state.wallet.keys()),
            special_keys: Some(state.wallet.special_keys()),
            chaos_keys: Some(state.wallet.chaos_keys()),
            fate_points: Some(state.wallet.fate.value()),
            active_buff: Some(state.buff.persisted().to_string()),
            unlocks: Some(UnlockDocument::from_record(&state.unlocks)),
            history: Some(state.journal.entries().to_vec()),
            rsn: state.sync.player.clone(),
            tracked_levels: state.sync.tracked_levels.clone(),
            tracked_collection_log: state.sync.tracked_collection_log,
        }
    }
}

/// Parse a save document, applying defaults and legacy migrations.
pub fn from_json(text: &str) -> CoreResult<GameState> {
    let doc: SaveDocument = serde_json::from_str(text)?;
    Ok(doc.into_state())
}

/// Serialize the full state as a pretty-printed save document.
pub fn to_json(state: &GameState) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(&SaveDocument::from_state(state))?)
}
