//! Canonical output-name construction.
//!
//! Every rename targets the same template:
//! `<Name> [UPDATE <version>][<Title-ID>].pkg`

use std::sync::LazyLock;

use pkg_rename_db::TitleRecord;
use regex::Regex;

/// Version placeholder used when neither the filename nor the database has
/// a version for the title.
pub const VERSION_SENTINEL: &str = "00.00";

/// Result of building a target filename.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedName {
    /// Sanitized target filename
    pub name: String,
    /// True when [`VERSION_SENTINEL`] had to be used
    pub version_fallback: bool,
}

static CANONICAL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.+ \[UPDATE [\d.]+\]\[[A-Z]{4}-\d{5}\]\.pkg$").unwrap()
});

/// Build the canonical target name for a record.
///
/// Version priority: the version extracted from the filename, then the
/// database version, then [`VERSION_SENTINEL`] with the fallback flag set.
pub fn format_name(record: &TitleRecord, extracted_version: Option<&str>) -> FormattedName {
    let (version, version_fallback) = match extracted_version {
        Some(v) => (v, false),
        None => match record.version.as_deref() {
            Some(v) => (v, false),
            None => (VERSION_SENTINEL, true),
        },
    };

    let display = sanitize_name(record.display_name());
    FormattedName {
        name: format!("{} [UPDATE {}][{}].pkg", display, version, record.title_id),
        version_fallback,
    }
}

/// Strip characters that are unsafe in filenames, drop trademark glyphs,
/// and collapse whitespace runs.
pub fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| {
            !matches!(
                c,
                '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' | '\u{2122}' | '\u{AE}'
            )
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a filename already matches the canonical output template.
pub fn is_canonical_name(filename: &str) -> bool {
    CANONICAL_SHAPE.is_match(filename)
}
