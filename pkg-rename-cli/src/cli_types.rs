//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pkg-rename")]
#[command(about = "Rename PS3 game-update .pkg files using a title database", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Analyze and rename .pkg files in a directory
    Rename {
        /// Directory containing .pkg files (prompted for when omitted)
        dir: Option<PathBuf>,

        /// Title database CSV (overrides the configured path)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Show the plan without renaming anything
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Copy originals to backup_before_rename/ without prompting
        #[arg(long, conflicts_with = "no_backup")]
        backup: bool,

        /// Skip the backup without prompting
        #[arg(long)]
        no_backup: bool,

        /// Skip the final confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,

        /// Audit log file (default: rename_log.txt in the target directory)
        #[arg(long)]
        audit_log: Option<PathBuf>,
    },

    /// Look up a title ID in the database
    Lookup {
        /// Title ID in any format (BCES-00011, bces00011, ...)
        title_id: String,

        /// Title database CSV (overrides the configured path)
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Manage the configured title-database path
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current configuration
    Show,

    /// Set the title-database CSV path
    SetDb {
        /// Path to the database CSV
        path: PathBuf,
    },

    /// Clear the saved database path
    ClearDb,

    /// Print the settings file path
    Path,
}
