use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pkg_rename_lib::settings;

use crate::error::CliError;

pub(crate) fn run_show() -> Result<(), CliError> {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "pkg-rename configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };
    log::info!(
        "  Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    );

    match settings::resolve_database_path(None) {
        Some(db) => log::info!(
            "  Database: {}",
            db.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "  Database: {}",
            "not configured".if_supports_color(Stdout, |t| t.yellow()),
        ),
    }

    Ok(())
}

pub(crate) fn run_set_db(path: &Path) -> Result<(), CliError> {
    if !path.is_file() {
        return Err(CliError::config(format!(
            "database file not found: {}",
            path.display()
        )));
    }

    settings::save_database_path(Some(path))?;
    log::info!(
        "{} Database path saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        settings::settings_path()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

pub(crate) fn run_clear_db() -> Result<(), CliError> {
    settings::save_database_path(None)?;
    log::info!(
        "{} Database path cleared",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}

pub(crate) fn run_path() -> Result<(), CliError> {
    println!("{}", settings::settings_path().display());
    Ok(())
}
