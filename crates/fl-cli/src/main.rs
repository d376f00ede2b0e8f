//! CLI frontend for Fatelock, a progress-gated unlock tracker.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fatelock",
    about = "Fatelock: roll for Keys, bend fate at the altar, and unlock the world",
    version,
    propagate_version = true
)]
struct Cli {
    /// Save file to load and update
    #[arg(short, long, global = true, default_value = "fatelock.json")]
    save: PathBuf,

    /// RNG seed for reproducible draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show currencies, the active buff, and total level
    Status,

    /// List every drop source with its rates
    Sources,

    /// Roll for a Key from a drop source (e.g. "slayer", "elite diary", "hard clue")
    Roll {
        /// Drop source name
        source: String,

        /// Number of rolls to make
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,
    },

    /// Roll for a Key with a custom label and threshold
    RollCustom {
        /// Label written to the log
        label: String,

        /// Success threshold (1-100)
        threshold: u32,
    },

    /// Level a skill up and roll for the new level
    Level {
        /// Skill name
        skill: String,

        /// Number of levels to gain
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,
    },

    /// Spend Keys on a random unlock from a table
    Unlock {
        /// Table name (skills, equipment, regions, bosses, ...)
        table: String,
    },

    /// Spend an Omni-Key on a chosen item
    Omni {
        /// Table name
        table: String,

        /// Item name
        item: String,
    },

    /// Spend a Chaos Key on a random unlock from a random table
    Chaos,

    /// Perform a ritual: clarity, greed, chaos, or transmutation
    Ritual {
        /// Ritual name
        name: String,
    },

    /// Show luck statistics
    Stats,

    /// Show recent log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Export the save or the log
    Export {
        /// Output format: json, markdown, text
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the save with an exported document
    Import {
        /// Document to import
        file: PathBuf,
    },

    /// Sync real progress from a stats snapshot file
    Sync {
        /// Player name
        player: String,

        /// JSON snapshot: {"skills": {"Attack": 40}, "collectionLog": 120}
        #[arg(long)]
        snapshot: PathBuf,

        /// Replay the gains instead of previewing them
        #[arg(long)]
        confirm: bool,
    },

    /// Show unlock progress, or the items of one table
    Tables {
        /// Table to list in detail
        table: Option<String>,
    },

    /// Start over from the initial state
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let ctx = commands::Context {
        save: cli.save,
        seed: cli.seed,
    };

    let result = match cli.command {
        Commands::Status => commands::status::run(&ctx),
        Commands::Sources => commands::sources::run(),
        Commands::Roll { source, times } => commands::roll::run(&ctx, &source, times),
        Commands::RollCustom { label, threshold } => {
            commands::roll::run_custom(&ctx, &label, threshold)
        }
        Commands::Level { skill, times } => commands::level::run(&ctx, &skill, times),
        Commands::Unlock { table } => commands::unlock::run_key(&ctx, &table),
        Commands::Omni { table, item } => commands::unlock::run_omni(&ctx, &table, &item),
        Commands::Chaos => commands::unlock::run_chaos(&ctx),
        Commands::Ritual { name } => commands::ritual::run(&ctx, &name),
        Commands::Stats => commands::stats::run(&ctx),
        Commands::Log { limit } => commands::history::run(&ctx, limit),
        Commands::Export { format, output } => {
            commands::export::run(&ctx, &format, output.as_deref())
        }
        Commands::Import { file } => commands::import::run(&ctx, &file),
        Commands::Sync {
            player,
            snapshot,
            confirm,
        } => commands::sync::run(&ctx, &player, &snapshot, confirm),
        Commands::Tables { table } => commands::tables::run(&ctx, table.as_deref()),
        Commands::Reset { yes } => commands::reset::run(&ctx, yes),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
