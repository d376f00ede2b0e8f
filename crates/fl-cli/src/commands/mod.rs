pub mod export;
pub mod history;
pub mod import;
pub mod level;
pub mod reset;
pub mod ritual;
pub mod roll;
pub mod sources;
pub mod stats;
pub mod status;
pub mod sync;
pub mod tables;
pub mod unlock;

use std::path::PathBuf;

use colored::Colorize;
use fl_core::{LogEntry, LogKind, LogOutcome, TableKind};
use fl_engine::{EngineConfig, FateSession, FileStore, RollOutcome, RollReport};
use log::{debug, warn};

/// Options shared by every command.
pub struct Context {
    pub save: PathBuf,
    pub seed: Option<u64>,
}

impl Context {
    fn config(&self) -> EngineConfig {
        match self.seed {
            Some(seed) => EngineConfig::default().with_seed(seed),
            None => EngineConfig::default(),
        }
    }

    /// Load the session from the save file. An unreadable save is copied
    /// to `<save>.bak` before anything can overwrite it.
    fn open(&self) -> Result<FateSession, String> {
        debug!("loading {}", self.save.display());
        let session = FateSession::load(&FileStore::new(&self.save), self.config())
            .map_err(|e| e.to_string())?;
        if session.recovered() {
            let backup = self.backup_path();
            std::fs::copy(&self.save, &backup)
                .map_err(|e| format!("failed to back up {}: {e}", self.save.display()))?;
            warn!(
                "{} is unreadable; starting fresh, old file kept at {}",
                self.save.display(),
                backup.display()
            );
        }
        Ok(session)
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = self.save.clone().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Write the session back to the save file.
    fn persist(&self, session: &FateSession) -> Result<(), String> {
        session
            .save(&FileStore::new(&self.save))
            .map_err(|e| e.to_string())
    }
}

fn parse_table(name: &str) -> Result<TableKind, String> {
    TableKind::parse(name).ok_or_else(|| {
        let known: Vec<&str> = TableKind::all().iter().map(|t| t.key()).collect();
        format!("unknown table \"{name}\" (expected one of: {})", known.join(", "))
    })
}

/// One-line summary of a roll.
fn print_roll(report: &RollReport) {
    let head = format!("{} (roll {} vs {})", report.source, report.roll, report.threshold);
    match report.outcome {
        RollOutcome::Success { keys } => {
            let keys = if keys == 1 {
                "+1 Key".to_string()
            } else {
                format!("+{keys} Keys")
            };
            println!("  {} {head}: {}", "✓".green(), keys.green().bold());
        }
        RollOutcome::Rare => {
            println!("  {} {head}: {}", "★".magenta(), "LEGENDARY! +1 Omni-Key".magenta().bold());
        }
        RollOutcome::Fail { fate_points } => {
            println!("  {} {head}: no Key (Fate Points {fate_points}/50)", "✗".red());
        }
        RollOutcome::Pity => {
            println!("  {} {head}: {}", "✗".red(), "the Fates take pity, +1 Key".yellow());
        }
    }
}

fn format_entry(entry: &LogEntry) -> String {
    let time = entry.timestamp.format("%Y-%m-%d %H:%M");
    let message = match (entry.kind, entry.outcome) {
        (LogKind::Roll, Some(LogOutcome::Rare)) => entry.message.magenta().bold(),
        (LogKind::Roll, Some(LogOutcome::Success)) => entry.message.green(),
        (LogKind::Roll, _) => entry.message.normal(),
        (LogKind::Pity, _) => entry.message.yellow(),
        (LogKind::Ritual, _) => entry.message.cyan(),
    };
    let source = entry
        .source
        .as_deref()
        .map(|s| format!("{}: ", s.bold()))
        .unwrap_or_default();
    match &entry.details {
        Some(details) => format!("  [{time}] {source}{message}\n      {}", details.dimmed()),
        None => format!("  [{time}] {source}{message}"),
    }
}
