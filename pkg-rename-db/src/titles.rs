//! PS3 title database CSV parser.
//!
//! Parses the community-maintained title list (one row per title ID) that
//! maps PS3 title IDs to game names and latest known update versions.

use std::io::Read;
use std::path::Path;

use crate::error::DbError;

/// A PS3 title ID in canonical hyphenated form, e.g. `BCES-00011`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitleId(String);

impl TitleId {
    /// Parse a title ID from loosely formatted input.
    ///
    /// Accepts any case and an optional `-`, `_`, or space between the
    /// four-letter prefix and the five-digit number, so `bces00011`,
    /// `BCES_00011`, and `BCES-00011` all normalize to `BCES-00011`.
    pub fn parse(input: &str) -> Option<Self> {
        let cleaned: String = input
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        if cleaned.len() != 9 {
            return None;
        }

        let (prefix, digits) = cleaned.split_at(4);
        if !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        Some(Self(format!("{}-{}", prefix.to_ascii_uppercase(), digits)))
    }

    /// The canonical hyphenated form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Separator-free uppercase key used for index lookups.
    pub fn normalized_key(&self) -> String {
        self.0.replace('-', "")
    }
}

impl std::fmt::Display for TitleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single title entry parsed from the database CSV.
#[derive(Debug, Clone)]
pub struct TitleRecord {
    /// Canonical title ID
    pub title_id: TitleId,
    /// Community title name
    pub title_name: String,
    /// Sony's official game name, when known
    pub sony_name: Option<String>,
    /// Latest known update version (e.g., `"01.29"`)
    pub version: Option<String>,
}

impl TitleRecord {
    /// Name used when building filenames. Sony's official name wins when
    /// present; an entry with no usable name at all shows as
    /// `"Unknown Game"`.
    pub fn display_name(&self) -> &str {
        match &self.sony_name {
            Some(name) if !name.is_empty() => name,
            _ if !self.title_name.is_empty() => &self.title_name,
            _ => "Unknown Game",
        }
    }
}

/// Parse the title database from a file path.
pub fn load_title_csv(path: &Path) -> Result<Vec<TitleRecord>, DbError> {
    if !path.is_file() {
        return Err(DbError::not_found(path.display().to_string()));
    }

    let mut file = std::fs::File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    parse_title_csv(&contents)
}

/// Parse title database CSV content from a string.
///
/// The header row is matched by column name, not position. Rows with a
/// missing or unparseable title ID are skipped with a warning rather than
/// failing the whole load.
pub fn parse_title_csv(content: &str) -> Result<Vec<TitleRecord>, DbError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| DbError::missing_column(name))
    };

    let id_col = column("Title_ID")?;
    let name_col = column("Title_Name")?;
    let sony_col = column("Sony_Game_Name")?;
    let version_col = column("Version")?;

    let mut records = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed database row: {e}");
                continue;
            }
        };

        let raw_id = record.get(id_col).unwrap_or("").trim();
        if raw_id.is_empty() {
            continue;
        }
        let title_id = match TitleId::parse(raw_id) {
            Some(id) => id,
            None => {
                log::warn!("Skipping row with invalid title ID: {raw_id:?}");
                continue;
            }
        };

        let cell = |i: usize| record.get(i).unwrap_or("").trim().to_string();
        let optional = |i: usize| {
            let value = cell(i);
            if value.is_empty() { None } else { Some(value) }
        };

        records.push(TitleRecord {
            title_id,
            title_name: cell(name_col),
            sony_name: optional(sony_col),
            version: optional(version_col),
        });
    }

    Ok(records)
}
