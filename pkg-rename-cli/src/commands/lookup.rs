use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

pub(crate) fn run(title_id: &str, db: Option<PathBuf>) -> Result<(), CliError> {
    let index = crate::commands::load_index(db)?;

    match index.lookup(title_id) {
        Some(record) => {
            log::info!(
                "{} {}",
                record.display_name().if_supports_color(Stdout, |t| t.bold()),
                format!("[{}]", record.title_id).if_supports_color(Stdout, |t| t.cyan()),
            );
            log::info!("  Title name: {}", record.title_name);
            if let Some(ref sony) = record.sony_name {
                log::info!("  Sony name:  {sony}");
            }
            match record.version {
                Some(ref version) => log::info!("  Version:    {version}"),
                None => log::info!(
                    "  Version:    {}",
                    "unknown".if_supports_color(Stdout, |t| t.dimmed()),
                ),
            }
        }
        None => {
            log::warn!(
                "{} No database entry for \"{}\"",
                "?".if_supports_color(Stdout, |t| t.yellow()),
                title_id,
            );
        }
    }

    Ok(())
}
