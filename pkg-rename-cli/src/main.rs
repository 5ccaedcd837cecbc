//! pkg-rename CLI
//!
//! Command-line tool for renaming PS3 game-update `.pkg` files to a
//! consistent `<Name> [UPDATE <version>][<Title-ID>].pkg` scheme.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Rename {
            dir,
            db,
            dry_run,
            backup,
            no_backup,
            yes,
            audit_log,
        } => commands::rename::run(commands::rename::RenameArgs {
            dir,
            db,
            dry_run,
            backup,
            no_backup,
            yes,
            audit_log,
            quiet: cli.quiet,
        }),
        Commands::Lookup { title_id, db } => commands::lookup::run(&title_id, db),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_show(),
            ConfigAction::SetDb { path } => commands::config::run_set_db(&path),
            ConfigAction::ClearDb => commands::config::run_clear_db(),
            ConfigAction::Path => commands::config::run_path(),
        },
    };

    if let Err(e) = result {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}
