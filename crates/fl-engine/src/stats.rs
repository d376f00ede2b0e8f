//! Luck statistics derived from the log.
//!
//! Nothing here is stored; every figure is recomputed from the entries, so
//! a loaded log yields the same numbers as the session that wrote it.

use fl_core::{Journal, LogEntry, LogKind};

/// Figures derived from roll history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    /// Roll entries in the log.
    pub total_rolls: usize,
    /// Rolls that met their threshold, rare drops included.
    pub successes: usize,
    /// Pity Keys granted.
    pub pity_keys: usize,
    /// Sum of `threshold / 100` over all rolls.
    pub expected_successes: f64,
    /// Failed rolls since the last success.
    pub current_dry_streak: usize,
    /// Longest run of failed rolls.
    pub longest_dry_streak: usize,
}

impl Statistics {
    /// Compute statistics from a sequence of entries.
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        let rolls: Vec<&LogEntry> = entries.iter().filter(|e| e.kind == LogKind::Roll).collect();

        let successes = rolls.iter().filter(|e| e.is_successful_roll()).count();
        let pity_keys = entries.iter().filter(|e| e.kind == LogKind::Pity).count();
        let expected_successes = rolls
            .iter()
            .map(|e| f64::from(e.threshold.unwrap_or(0)) / 100.0)
            .sum();

        let mut run = 0;
        let mut longest = 0;
        for entry in &rolls {
            if entry.is_failed_roll() {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 0;
            }
        }

        Self {
            total_rolls: rolls.len(),
            successes,
            pity_keys,
            expected_successes,
            current_dry_streak: run,
            longest_dry_streak: longest,
        }
    }

    /// Compute statistics for a journal.
    pub fn from_journal(journal: &Journal) -> Self {
        Self::from_entries(journal.entries())
    }

    /// Actual minus expected successes. Positive means lucky.
    pub fn luck_deviation(&self) -> f64 {
        self.successes as f64 - self.expected_successes
    }

    /// Deviation as a percentage of expected successes (0 with no rolls).
    pub fn luck_percent(&self) -> f64 {
        if self.expected_successes > 0.0 {
            self.luck_deviation() / self.expected_successes * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fl_core::LogOutcome;
    use proptest::prelude::*;

    fn roll(outcome: LogOutcome, threshold: u32) -> LogEntry {
        LogEntry::roll("Slayer Task", outcome, 10, threshold, "")
    }

    #[test]
    fn empty_log() {
        let stats = Statistics::from_entries(&[]);
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.luck_percent(), 0.0);
    }

    #[test]
    fn counts_and_expectation() {
        let entries = vec![
            roll(LogOutcome::Success, 50),
            roll(LogOutcome::Fail, 50),
            LogEntry::ritual("Ritual of Clarity Performed"),
            roll(LogOutcome::Rare, 100),
            roll(LogOutcome::Fail, 20),
            LogEntry::pity("The Fates take pity on you."),
        ];
        let stats = Statistics::from_entries(&entries);
        assert_eq!(stats.total_rolls, 4);
        assert_eq!(stats.successes, 2);
        assert_eq!(stats.pity_keys, 1);
        assert!((stats.expected_successes - 2.2).abs() < 1e-9);
        assert!((stats.luck_deviation() - (-0.2)).abs() < 1e-9);
        assert_eq!(stats.current_dry_streak, 1);
    }

    #[test]
    fn streaks() {
        use LogOutcome::{Fail, Success};
        let entries: Vec<LogEntry> = [Fail, Fail, Fail, Success, Fail, Fail]
            .into_iter()
            .map(|o| roll(o, 20))
            .collect();
        let stats = Statistics::from_entries(&entries);
        assert_eq!(stats.longest_dry_streak, 3);
        assert_eq!(stats.current_dry_streak, 2);
    }

    #[test]
    fn ritual_entries_do_not_break_streaks() {
        let entries = vec![
            roll(LogOutcome::Fail, 20),
            LogEntry::ritual("Ritual of Greed Performed"),
            roll(LogOutcome::Fail, 20),
        ];
        assert_eq!(Statistics::from_entries(&entries).current_dry_streak, 2);
    }

    proptest! {
        #[test]
        fn streaks_match_naive_recount(fails in proptest::collection::vec(any::<bool>(), 0..200)) {
            let entries: Vec<LogEntry> = fails
                .iter()
                .map(|f| roll(if *f { LogOutcome::Fail } else { LogOutcome::Success }, 20))
                .collect();
            let stats = Statistics::from_entries(&entries);

            let tail = fails.iter().rev().take_while(|f| **f).count();
            let longest = (0..fails.len())
                .map(|start| fails[start..].iter().take_while(|f| **f).count())
                .max()
                .unwrap_or(0);
            prop_assert_eq!(stats.current_dry_streak, tail);
            prop_assert_eq!(stats.longest_dry_streak, longest);
            prop_assert!(stats.current_dry_streak <= stats.longest_dry_streak);
            prop_assert!(stats.successes + tail <= stats.total_rolls);
        }
    }
}
