//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::{LogEntry, LogKind};

/// A chronological, append-only log of game activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<LogEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a journal from previously recorded entries.
    pub fn from_entries(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    /// Append an entry.
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Roll entries only, oldest first.
    pub fn rolls(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(|e| e.kind == LogKind::Roll)
    }

    /// The most recent `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Fate Log\n\n");
        for entry in &self.entries {
            let time = entry.timestamp.format("%Y-%m-%d %H:%M");
            match entry.kind {
                LogKind::Roll => {
                    let source = entry.source.as_deref().unwrap_or("Roll");
                    out.push_str(&format!("**{source}** ({time}): {}\n", entry.message));
                }
                LogKind::Pity => {
                    out.push_str(&format!("*Pity* ({time}): {}\n", entry.message));
                }
                LogKind::Ritual => {
                    out.push_str(&format!("**Altar** ({time}): {}\n", entry.message));
                }
            }
            if let Some(details) = &entry.details {
                out.push_str(&format!("  {details}\n"));
            }
            out.push('\n');
        }
        out
    }

    /// Export as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Fate Log\n========\n\n");
        for entry in &self.entries {
            let time = entry.timestamp.format("%Y-%m-%d %H:%M");
            let tag = match entry.kind {
                LogKind::Roll => "ROLL",
                LogKind::Pity => "PITY",
                LogKind::Ritual => "ALTAR",
            };
            out.push_str(&format!("[{time}] {tag:<5} "));
            if let Some(source) = &entry.source {
                out.push_str(&format!("{source}: "));
            }
            out.push_str(&entry.message);
            if let Some(details) = &entry.details {
                out.push_str(&format!(" ({details})"));
            }
            out.push('\n');
        }
        out
    }
}
