//! Per-table unlock progress.
//!
//! Tiered tables map each item to its tier. Skills also carry a displayed
//! level, bounded by the cap its tier grants. Binary tables keep the set of
//! unlocked item names in unlock order.

use std::collections::BTreeMap;

use crate::catalog::{TableKind, level_cap};

/// Skill that starts unlocked at tier 1.
pub const STARTING_SKILL: &str = "Hitpoints";

/// Level the starting skill begins at.
pub const STARTING_SKILL_LEVEL: u32 = 10;

/// What committing an unlock changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockChange {
    /// A tiered item moved from one tier to the next.
    TierRaised {
        /// Tier before the unlock.
        from: u32,
        /// Tier after the unlock.
        to: u32,
    },
    /// A binary item was added to its table's unlocked set.
    Unlocked,
    /// Nothing changed: the item was already maxed or already unlocked.
    Unchanged,
}

/// Unlock progress across all ten tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockRecord {
    skills: BTreeMap<String, u32>,
    levels: BTreeMap<String, u32>,
    equipment: BTreeMap<String, u32>,
    unlocked: BTreeMap<TableKind, Vec<String>>,
}

impl Default for UnlockRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl UnlockRecord {
    /// The starting record: Hitpoints at tier 1 and level 10, every other
    /// skill at level 1, everything else locked.
    pub fn new() -> Self {
        let mut skills = BTreeMap::new();
        skills.insert(STARTING_SKILL.to_string(), 1);

        let levels = TableKind::Skills
            .items()
            .iter()
            .map(|skill| {
                let level = if *skill == STARTING_SKILL {
                    STARTING_SKILL_LEVEL
                } else {
                    1
                };
                (skill.to_string(), level)
            })
            .collect();

        let equipment = TableKind::Equipment
            .items()
            .iter()
            .map(|slot| (slot.to_string(), 0))
            .collect();

        Self {
            skills,
            levels,
            equipment,
            unlocked: BTreeMap::new(),
        }
    }

    /// Current tier of a tiered item (0 when never unlocked or for binary tables).
    pub fn tier(&self, table: TableKind, item: &str) -> u32 {
        self.tier_map(table)
            .and_then(|tiers| tiers.get(item).copied())
            .unwrap_or(0)
    }

    /// All recorded tiers of a tiered table.
    pub fn tiers(&self, table: TableKind) -> Option<&BTreeMap<String, u32>> {
        self.tier_map(table)
    }

    /// Displayed level of a skill (1 if never recorded).
    pub fn level(&self, skill: &str) -> u32 {
        self.levels.get(skill).copied().unwrap_or(1)
    }

    /// All displayed skill levels.
    pub fn levels(&self) -> &BTreeMap<String, u32> {
        &self.levels
    }

    /// Level cap of a skill at its current tier.
    pub fn skill_cap(&self, skill: &str) -> u32 {
        level_cap(self.tier(TableKind::Skills, skill))
    }

    /// Sum of all displayed skill levels.
    pub fn total_level(&self) -> u32 {
        TableKind::Skills
            .items()
            .iter()
            .map(|skill| self.level(skill))
            .sum()
    }

    /// Unlocked items of a binary table, in unlock order. Empty for tiered tables.
    pub fn unlocked(&self, table: TableKind) -> &[String] {
        self.unlocked.get(&table).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether an item counts as unlocked (tier above 0 for tiered tables).
    pub fn is_unlocked(&self, table: TableKind, item: &str) -> bool {
        if table.is_tiered() {
            self.tier(table, item) > 0
        } else {
            self.unlocked(table).iter().any(|i| i == item)
        }
    }

    /// Whether an item can still be unlocked: below its max tier, or absent
    /// from its binary set. Affordability is not considered here.
    pub fn is_eligible(&self, table: TableKind, item: &str) -> bool {
        match table.max_tier() {
            Some(max) => self.tier(table, item) < max,
            None => !self.is_unlocked(table, item),
        }
    }

    /// Canonical items of a table that are still eligible, in catalog order.
    pub fn eligible(&self, table: TableKind) -> Vec<&'static str> {
        table
            .items()
            .iter()
            .copied()
            .filter(|item| self.is_eligible(table, item))
            .collect()
    }

    /// Whether a table has at least one eligible item.
    pub fn can_unlock(&self, table: TableKind) -> bool {
        table
            .items()
            .iter()
            .any(|item| self.is_eligible(table, item))
    }

    /// Progress as `(done, total)`: tiers earned out of all possible tiers for
    /// tiered tables, unlocked items out of all items for binary tables.
    pub fn progress(&self, table: TableKind) -> (u32, u32) {
        let items = table.items();
        match table.max_tier() {
            Some(max) => {
                let done = items
                    .iter()
                    .map(|item| self.tier(table, item).min(max))
                    .sum();
                (done, items.len() as u32 * max)
            }
            None => {
                let done = items
                    .iter()
                    .filter(|item| self.is_unlocked(table, item))
                    .count();
                (done as u32, items.len() as u32)
            }
        }
    }

    /// Apply one unlock: raise a tier by exactly one, or insert into the set.
    pub fn apply(&mut self, table: TableKind, item: &str) -> UnlockChange {
        match table.max_tier() {
            Some(max) => {
                let from = self.tier(table, item);
                if from >= max {
                    return UnlockChange::Unchanged;
                }
                if let Some(tiers) = self.tier_map_mut(table) {
                    tiers.insert(item.to_string(), from + 1);
                }
                UnlockChange::TierRaised { from, to: from + 1 }
            }
            None => {
                if self.is_unlocked(table, item) {
                    return UnlockChange::Unchanged;
                }
                self.unlocked
                    .entry(table)
                    .or_default()
                    .push(item.to_string());
                UnlockChange::Unlocked
            }
        }
    }

    /// Set a skill's displayed level, clamped to `[1, cap]`.
    pub fn set_level(&mut self, skill: &str, level: u32) -> u32 {
        let level = level.clamp(1, self.skill_cap(skill).max(1));
        self.levels.insert(skill.to_string(), level);
        level
    }

    /// Record a tier directly, clamped to the table's max. Used when
    /// restoring a saved record. Tiers never go down.
    pub fn restore_tier(&mut self, table: TableKind, item: &str, tier: u32) {
        let Some(max) = table.max_tier() else {
            return;
        };
        let tier = tier.min(max);
        if let Some(tiers) = self.tier_map_mut(table) {
            let slot = tiers.entry(item.to_string()).or_insert(0);
            *slot = (*slot).max(tier);
        }
    }

    /// Record a displayed level directly. The value is clamped to the cap of
    /// the skill's current tier, so restore tiers first.
    pub fn restore_level(&mut self, skill: &str, level: u32) {
        self.set_level(skill, level);
    }

    /// Insert a binary-table item when restoring. Duplicates are dropped.
    pub fn restore_unlocked(&mut self, table: TableKind, item: &str) {
        if !table.is_tiered() {
            self.apply(table, item);
        }
    }

    fn tier_map(&self, table: TableKind) -> Option<&BTreeMap<String, u32>> {
        match table {
            TableKind::Skills => Some(&self.skills),
            TableKind::Equipment => Some(&self.equipment),
            _ => None,
        }
    }

    fn tier_map_mut(&mut self, table: TableKind) -> Option<&mut BTreeMap<String, u32>> {
        match table {
            TableKind::Skills => Some(&mut self.skills),
            TableKind::Equipment => Some(&mut self.equipment),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starting_record() {
        let record = UnlockRecord::new();
        assert_eq!(record.tier(TableKind::Skills, "Hitpoints"), 1);
        assert_eq!(record.level("Hitpoints"), 10);
        assert_eq!(record.level("Attack"), 1);
        assert_eq!(record.tier(TableKind::Equipment, "Head"), 0);
        assert_eq!(record.total_level(), 23 + 10);
        assert!(record.unlocked(TableKind::Bosses).is_empty());
    }

    #[test]
    fn tier_increments_by_one() {
        let mut record = UnlockRecord::new();
        assert_eq!(
            record.apply(TableKind::Skills, "Attack"),
            UnlockChange::TierRaised { from: 0, to: 1 }
        );
        assert_eq!(record.tier(TableKind::Skills, "Attack"), 1);
        assert_eq!(record.skill_cap("Attack"), 10);
    }

    #[test]
    fn tier_stops_at_max() {
        let mut record = UnlockRecord::new();
        for _ in 0..9 {
            record.apply(TableKind::Equipment, "Ring");
        }
        assert_eq!(record.tier(TableKind::Equipment, "Ring"), 9);
        assert!(!record.is_eligible(TableKind::Equipment, "Ring"));
        assert_eq!(
            record.apply(TableKind::Equipment, "Ring"),
            UnlockChange::Unchanged
        );
    }

    #[test]
    fn binary_insert_is_idempotent() {
        let mut record = UnlockRecord::new();
        assert_eq!(
            record.apply(TableKind::Bosses, "Zulrah"),
            UnlockChange::Unlocked
        );
        assert_eq!(
            record.apply(TableKind::Bosses, "Zulrah"),
            UnlockChange::Unchanged
        );
        assert_eq!(record.unlocked(TableKind::Bosses), ["Zulrah"]);
        assert!(!record.is_eligible(TableKind::Bosses, "Zulrah"));
    }

    #[test]
    fn eligible_excludes_unlocked() {
        let mut record = UnlockRecord::new();
        record.apply(TableKind::Storage, "Looting Bag");
        let pool = record.eligible(TableKind::Storage);
        assert_eq!(pool.len(), 11);
        assert!(!pool.contains(&"Looting Bag"));
    }

    #[test]
    fn can_unlock_when_exhausted() {
        let mut record = UnlockRecord::new();
        for item in TableKind::Housing.items() {
            record.apply(TableKind::Housing, item);
        }
        assert!(!record.can_unlock(TableKind::Housing));
        assert_eq!(record.progress(TableKind::Housing), (12, 12));
    }

    #[test]
    fn progress_for_tiers() {
        let record = UnlockRecord::new();
        assert_eq!(record.progress(TableKind::Skills), (1, 240));
        assert_eq!(record.progress(TableKind::Equipment), (0, 99));
    }

    #[test]
    fn level_clamped_to_cap() {
        let mut record = UnlockRecord::new();
        assert_eq!(record.set_level("Hitpoints", 50), 10);
        assert_eq!(record.set_level("Attack", 5), 1);
    }

    #[test]
    fn restore_clamps() {
        let mut record = UnlockRecord::new();
        record.restore_tier(TableKind::Skills, "Magic", 40);
        assert_eq!(record.tier(TableKind::Skills, "Magic"), 10);
        record.restore_level("Magic", 120);
        assert_eq!(record.level("Magic"), 99);
        record.restore_unlocked(TableKind::Regions, "Falador");
        record.restore_unlocked(TableKind::Regions, "Falador");
        assert_eq!(record.unlocked(TableKind::Regions).len(), 1);
    }

    proptest! {
        #[test]
        fn tiers_never_exceed_max(picks in proptest::collection::vec(0usize..11, 0..200)) {
            let mut record = UnlockRecord::new();
            let slots = TableKind::Equipment.items();
            for pick in picks {
                let before = record.tier(TableKind::Equipment, slots[pick]);
                record.apply(TableKind::Equipment, slots[pick]);
                let after = record.tier(TableKind::Equipment, slots[pick]);
                prop_assert!(after >= before);
                prop_assert!(after - before <= 1);
                prop_assert!(after <= 9);
            }
        }
    }
}
