//! Stats sync: turning real progress into rolls.
//!
//! A snapshot of the player's levels and collection-log score is compared
//! with the baseline from the last sync. Every level gained and every new
//! collection-log slot becomes one roll, replayed in a fixed order.

use std::collections::BTreeMap;

use fl_core::{GameState, SyncProfile, TableKind};
use serde::{Deserialize, Serialize};

use crate::draw::Draw;
use crate::error::EngineResult;
use crate::rates::{COLLECTION_LOG_LABEL, DropSource, level_up_label, level_up_threshold};
use crate::roll::{RollReport, resolve};

/// Highest skill level a snapshot can report.
pub const MAX_SKILL_LEVEL: u32 = 99;

/// Highest collection-log score a snapshot can report.
pub const MAX_COLLECTION_LOG_SCORE: u32 = 5_000;

fn clamp_level(level: u32) -> u32 {
    level.clamp(1, MAX_SKILL_LEVEL)
}

/// Stats as reported by the remote source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Skill name to level.
    #[serde(default)]
    pub skills: BTreeMap<String, u32>,
    /// Collection-log score.
    #[serde(default)]
    pub collection_log: u32,
}

impl StatsSnapshot {
    /// Levels keyed by canonical skill name, clamped to `[1, 99]`. Unknown
    /// skills are dropped.
    pub fn canonical_levels(&self) -> BTreeMap<String, u32> {
        self.skills
            .iter()
            .filter_map(|(name, level)| {
                TableKind::Skills
                    .find_item(name)
                    .map(|skill| (skill.to_string(), clamp_level(*level)))
            })
            .collect()
    }

    /// Collection-log score, clamped to [`MAX_COLLECTION_LOG_SCORE`].
    pub fn collection_log_score(&self) -> u32 {
        self.collection_log.min(MAX_COLLECTION_LOG_SCORE)
    }
}

/// Levels gained in one skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGain {
    /// Canonical skill name.
    pub skill: &'static str,
    /// Level at the last sync.
    pub from: u32,
    /// Level now.
    pub to: u32,
}

/// Everything gained since the last sync.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncDiff {
    /// Skills that went up, in catalog order.
    pub levels: Vec<LevelGain>,
    /// New collection-log slots.
    pub collection_log: u32,
}

impl SyncDiff {
    /// Compare a snapshot with the stored baseline.
    pub fn compute(profile: &SyncProfile, snapshot: &StatsSnapshot) -> Self {
        let current = snapshot.canonical_levels();
        let levels = TableKind::Skills
            .items()
            .iter()
            .copied()
            .filter_map(|skill| {
                let to = *current.get(skill)?;
                let from = clamp_level(*profile.tracked_levels.get(skill)?);
                (to > from).then_some(LevelGain { skill, from, to })
            })
            .collect();
        let collection_log = profile
            .tracked_collection_log
            .map_or(0, |tracked| {
                snapshot
                    .collection_log_score()
                    .saturating_sub(tracked.min(MAX_COLLECTION_LOG_SCORE))
            });
        Self {
            levels,
            collection_log,
        }
    }

    /// Whether nothing was gained.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty() && self.collection_log == 0
    }

    /// Number of rolls a replay will make.
    pub fn roll_count(&self) -> u32 {
        self.levels
            .iter()
            .fold(self.collection_log, |total, g| {
                total.saturating_add(g.to.saturating_sub(g.from))
            })
    }
}

/// What a fetched snapshot means for the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncPlan {
    /// No baseline existed; the snapshot becomes the baseline and nothing is rolled.
    Baseline,
    /// Gains found, waiting for confirmation.
    Changes(SyncDiff),
}

/// Outcome of a confirmed sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Every roll made, in replay order.
    pub rolls: Vec<RollReport>,
    /// Keys gained across the replay, pity Keys included.
    pub keys_gained: u32,
    /// Omni-Keys gained across the replay.
    pub special_keys_gained: u32,
}

/// Record `snapshot` as the new baseline.
pub fn record_baseline(profile: &mut SyncProfile, player: &str, snapshot: &StatsSnapshot) {
    profile.player = Some(player.to_string());
    profile.tracked_levels = snapshot.canonical_levels();
    profile.tracked_collection_log = Some(snapshot.collection_log_score());
}

/// Roll once per gained level, then once per new collection-log slot, and
/// move the baseline forward.
pub fn replay(
    state: &mut GameState,
    draw: &mut dyn Draw,
    player: &str,
    diff: &SyncDiff,
    snapshot: &StatsSnapshot,
) -> EngineResult<SyncReport> {
    let keys_before = state.wallet.keys();
    let special_before = state.wallet.special_keys();
    let mut rolls = Vec::new();

    for gain in &diff.levels {
        for level in gain.from.saturating_add(1)..=gain.to {
            rolls.push(resolve(
                state,
                draw,
                &level_up_label(gain.skill, level),
                level_up_threshold(level),
            )?);
        }
    }
    for _ in 0..diff.collection_log {
        rolls.push(resolve(
            state,
            draw,
            COLLECTION_LOG_LABEL,
            DropSource::CollectionLog.threshold(),
        )?);
    }

    record_baseline(&mut state.sync, player, snapshot);

    Ok(SyncReport {
        rolls,
        keys_gained: state.wallet.keys().saturating_sub(keys_before),
        special_keys_gained: state.wallet.special_keys().saturating_sub(special_before),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ScriptedDraw;

    fn snapshot(levels: &[(&str, u32)], clog: u32) -> StatsSnapshot {
        StatsSnapshot {
            skills: levels.iter().map(|(s, l)| (s.to_string(), *l)).collect(),
            collection_log: clog,
        }
    }

    fn baseline(levels: &[(&str, u32)], clog: u32) -> SyncProfile {
        let mut profile = SyncProfile::default();
        record_baseline(&mut profile, "Zezima", &snapshot(levels, clog));
        profile
    }

    #[test]
    fn diff_without_baseline_is_empty() {
        let diff = SyncDiff::compute(&SyncProfile::default(), &snapshot(&[("Attack", 40)], 10));
        assert!(diff.is_empty());
    }

    #[test]
    fn diff_in_catalog_order() {
        let profile = baseline(&[("Mining", 10), ("Attack", 5), ("Magic", 50)], 3);
        let now = snapshot(&[("mining", 12), ("Attack", 7), ("Magic", 50)], 5);
        let diff = SyncDiff::compute(&profile, &now);
        assert_eq!(
            diff.levels,
            vec![
                LevelGain { skill: "Attack", from: 5, to: 7 },
                LevelGain { skill: "Mining", from: 10, to: 12 },
            ]
        );
        assert_eq!(diff.collection_log, 2);
        assert_eq!(diff.roll_count(), 6);
    }

    #[test]
    fn lower_values_are_ignored() {
        let profile = baseline(&[("Attack", 40)], 30);
        let diff = SyncDiff::compute(&profile, &snapshot(&[("Attack", 39)], 20));
        assert!(diff.is_empty());
    }

    #[test]
    fn replay_rolls_in_order() {
        let mut state = GameState::new(0);
        state.sync = baseline(&[("Attack", 5), ("Mining", 10)], 3);
        let now = snapshot(&[("Attack", 7), ("Mining", 11)], 4);
        let diff = SyncDiff::compute(&state.sync, &now);

        let mut draw = ScriptedDraw::new([1, 100]);
        let report = replay(&mut state, &mut draw, "Zezima", &diff, &now).unwrap();
        let labels: Vec<&str> = report.rolls.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(
            labels,
            ["Attack Level 6", "Attack Level 7", "Mining Level 11", "Collection Log Slot"]
        );
        assert_eq!(report.rolls[0].threshold, 2);
        assert_eq!(report.rolls[3].threshold, 5);
        assert_eq!(report.keys_gained, 1);
        assert_eq!(state.journal.len(), 4);

        assert_eq!(state.sync.tracked_levels.get("Attack"), Some(&7));
        assert_eq!(state.sync.tracked_collection_log, Some(4));
        assert!(SyncDiff::compute(&state.sync, &now).is_empty());
    }

    #[test]
    fn replay_does_not_touch_displayed_levels() {
        let mut state = GameState::new(0);
        state.sync = baseline(&[("Attack", 5)], 0);
        let now = snapshot(&[("Attack", 6)], 0);
        let diff = SyncDiff::compute(&state.sync, &now);
        let mut draw = ScriptedDraw::default();
        replay(&mut state, &mut draw, "Zezima", &diff, &now).unwrap();
        assert_eq!(state.unlocks.level("Attack"), 1);
    }

    #[test]
    fn oversized_snapshot_is_clamped() {
        let profile = baseline(&[("Attack", 1), ("Strength", 1)], 0);
        let now = snapshot(&[("Attack", u32::MAX), ("Strength", u32::MAX)], u32::MAX);
        let diff = SyncDiff::compute(&profile, &now);
        assert_eq!(
            diff.levels,
            vec![
                LevelGain { skill: "Attack", from: 1, to: 99 },
                LevelGain { skill: "Strength", from: 1, to: 99 },
            ]
        );
        assert_eq!(diff.collection_log, MAX_COLLECTION_LOG_SCORE);
        assert_eq!(diff.roll_count(), 98 * 2 + MAX_COLLECTION_LOG_SCORE);
    }

    #[test]
    fn oversized_baseline_is_clamped() {
        let profile = SyncProfile {
            player: Some("Zezima".to_string()),
            tracked_levels: [("Attack".to_string(), u32::MAX)].into_iter().collect(),
            tracked_collection_log: Some(u32::MAX),
        };
        let diff = SyncDiff::compute(&profile, &snapshot(&[("Attack", 99)], 10));
        assert!(diff.is_empty());

        let recorded = baseline(&[("Attack", u32::MAX)], u32::MAX);
        assert_eq!(recorded.tracked_levels.get("Attack"), Some(&99));
        assert_eq!(recorded.tracked_collection_log, Some(MAX_COLLECTION_LOG_SCORE));
    }

    #[test]
    fn roll_count_saturates() {
        let diff = SyncDiff {
            levels: vec![LevelGain { skill: "Attack", from: 0, to: u32::MAX }],
            collection_log: u32::MAX,
        };
        assert_eq!(diff.roll_count(), u32::MAX);
    }

    #[test]
    fn snapshot_json_shape() {
        let parsed: StatsSnapshot =
            serde_json::from_str(r#"{"skills": {"Attack": 40}, "collectionLog": 120}"#).unwrap();
        assert_eq!(parsed.collection_log, 120);
        assert_eq!(parsed.skills.get("Attack"), Some(&40));
    }
}
