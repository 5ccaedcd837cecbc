use std::path::PathBuf;

use pkg_rename_db::{TitleIndex, load_title_csv};
use pkg_rename_lib::settings;

use crate::error::CliError;

pub(crate) mod config;
pub(crate) mod lookup;
pub(crate) mod rename;

/// Resolve the database path and load it into an index.
pub(crate) fn load_index(db: Option<PathBuf>) -> Result<TitleIndex, CliError> {
    let path = settings::resolve_database_path(db).ok_or_else(|| {
        CliError::config(
            "no title database configured; pass --db or run 'pkg-rename config set-db <path>'",
        )
    })?;
    let records = load_title_csv(&path)?;
    log::debug!("Loaded {} titles from {}", records.len(), path.display());
    Ok(TitleIndex::from_records(records))
}
