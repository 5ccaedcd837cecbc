//! Application settings (title-database path, config file location).

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/pkg-rename/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("pkg-rename").join("settings.toml")
}

/// Database filename looked for in the working directory when nothing is
/// configured.
pub const DEFAULT_DB_FILENAME: &str = "ps3_titles.csv";

/// Resolve the title-database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `database.csv_path` in `settings.toml`
/// 3. `ps3_titles.csv` in the current working directory, if present
pub fn resolve_database_path(cli_override: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_override {
        return Some(p);
    }
    if let Some(p) = load_database_path() {
        return Some(p);
    }
    let local = PathBuf::from(DEFAULT_DB_FILENAME);
    if local.is_file() { Some(local) } else { None }
}

/// Read `database.csv_path` from `settings.toml`, if set.
fn load_database_path() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("database")?.get("csv_path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the database path in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated fields are
/// preserved.
pub fn save_database_path(path: Option<&Path>) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [database] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let database = table
        .entry("database")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let db_table = database
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[database] is not a table"))?;

    match path {
        Some(p) => {
            db_table.insert(
                "csv_path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            db_table.remove("csv_path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(())
}
