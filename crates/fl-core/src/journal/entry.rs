//! Log entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    /// A roll for a Key.
    #[serde(rename = "ROLL")]
    Roll,
    /// A pity Key granted after 50 accrued failures.
    #[serde(rename = "PITY")]
    Pity,
    /// A ritual or a milestone reward.
    #[serde(rename = "ALTAR", alias = "RITUAL")]
    Ritual,
}

/// How a logged roll turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogOutcome {
    /// The roll met its threshold and paid Keys.
    Success,
    /// The roll met its threshold and the rare sub-roll paid an Omni-Key.
    Rare,
    /// The roll missed.
    Fail,
    /// Fate took pity.
    Pity,
}

impl LogOutcome {
    /// Whether this outcome is a successful roll (rare drops included).
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success | Self::Rare)
    }
}

/// An immutable record of something that happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Unique id.
    #[serde(default = "new_id")]
    pub id: String,
    /// When the entry was created.
    #[serde(default = "Utc::now", with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: LogKind,
    /// Activity label the roll was made for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Outcome, when the entry records one.
    #[serde(
        default,
        rename = "result",
        skip_serializing_if = "Option::is_none"
    )]
    pub outcome: Option<LogOutcome>,
    /// Headline message.
    #[serde(default)]
    pub message: String,
    /// Secondary detail line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// The effective roll value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_value: Option<u32>,
    /// The success threshold the roll was made against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl LogEntry {
    fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            timestamp: Utc::now(),
            kind,
            source: None,
            outcome: None,
            message: message.into(),
            details: None,
            roll_value: None,
            threshold: None,
        }
    }

    /// A roll entry carrying the roll value and threshold.
    pub fn roll(
        source: impl Into<String>,
        outcome: LogOutcome,
        roll_value: u32,
        threshold: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: Some(source.into()),
            outcome: Some(outcome),
            roll_value: Some(roll_value),
            threshold: Some(threshold),
            ..Self::new(LogKind::Roll, message)
        }
    }

    /// A pity entry.
    pub fn pity(message: impl Into<String>) -> Self {
        Self {
            outcome: Some(LogOutcome::Pity),
            ..Self::new(LogKind::Pity, message)
        }
    }

    /// A ritual entry.
    pub fn ritual(message: impl Into<String>) -> Self {
        Self::new(LogKind::Ritual, message)
    }

    /// Attach a detail line.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Whether this is a roll entry that failed.
    pub fn is_failed_roll(&self) -> bool {
        self.kind == LogKind::Roll && self.outcome == Some(LogOutcome::Fail)
    }

    /// Whether this is a roll entry that succeeded.
    pub fn is_successful_roll(&self) -> bool {
        self.kind == LogKind::Roll && self.outcome.is_some_and(LogOutcome::is_success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_entry_fields() {
        let entry = LogEntry::roll("Slayer Task", LogOutcome::Fail, 77, 20, "No Key.")
            .with_details("Fate Points: 1/50");
        assert_eq!(entry.kind, LogKind::Roll);
        assert_eq!(entry.roll_value, Some(77));
        assert_eq!(entry.threshold, Some(20));
        assert!(entry.is_failed_roll());
        assert!(!entry.is_successful_roll());
    }

    #[test]
    fn ids_are_unique() {
        let a = LogEntry::ritual("a");
        let b = LogEntry::ritual("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn reads_browser_shape() {
        let json = r#"{"id":"k3x9q2z1a","timestamp":1717000000000,"type":"ROLL",
            "source":"Elite Diary","result":"SUCCESS","message":"Key Found!",
            "rollValue":12,"threshold":100}"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "k3x9q2z1a");
        assert_eq!(entry.timestamp.timestamp_millis(), 1_717_000_000_000);
        assert_eq!(entry.outcome, Some(LogOutcome::Success));
        assert!(entry.is_successful_roll());
    }

    #[test]
    fn altar_and_missing_fields() {
        let json = r#"{"type":"ALTAR","message":"Ritual of Chaos Performed"}"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, LogKind::Ritual);
        assert!(!entry.id.is_empty());
        assert_eq!(entry.outcome, None);
    }

    #[test]
    fn rare_counts_as_success() {
        assert!(LogOutcome::Rare.is_success());
        assert!(!LogOutcome::Pity.is_success());
    }
}
