//! Filename parsing for PS3 update packages.
//!
//! Update `.pkg` files show up in a few naming shapes: full content IDs like
//! `EP9000-BCES00011_00-SINGSTARPS3V0600-A0600-V0100-PE.pkg`, bare title IDs
//! like `BCES-00011 patch.pkg`, and hand-renamed files with the version
//! buried somewhere in between. Extraction runs a prioritized rule list and
//! the first rule that matches wins.

use std::sync::LazyLock;

use pkg_rename_db::TitleId;
use regex::Regex;

/// Title ID and version extracted from a filename. Either part can be
/// missing independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFilename {
    pub title_id: Option<TitleId>,
    pub version: Option<String>,
}

/// Title-ID extraction rules, most specific first.
static TITLE_ID_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Sony content ID: "EP9000-BCES00011_00-..."
        Regex::new(r"[A-Z]{2}\d{4}-([A-Z]{4})(\d{5})").unwrap(),
        // Bare title ID, with or without a separator: "BCES-00011", "BCES00011"
        Regex::new(r"([A-Z]{4})[-_]?(\d{5})").unwrap(),
    ]
});

/// Version extraction rules, most specific first.
static VERSION_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Content-ID style token: "V0600" -> 06.00
        Regex::new(r"V(\d{4})").unwrap(),
        // Already dotted: "v1.20"
        Regex::new(r"v(\d+\.\d+)").unwrap(),
        // Dotted token between underscores: "_01.29_"
        Regex::new(r"_(\d+\.\d+)_").unwrap(),
        // Activation-style token: "-A0126-"
        Regex::new(r"-A(\d{4})-").unwrap(),
    ]
});

/// Extract the title ID from a filename, trying each rule in priority order.
pub fn extract_title_id(filename: &str) -> Option<TitleId> {
    for rule in TITLE_ID_RULES.iter() {
        if let Some(caps) = rule.captures(filename) {
            let raw = format!("{}{}", &caps[1], &caps[2]);
            if let Some(id) = TitleId::parse(&raw) {
                return Some(id);
            }
        }
    }
    None
}

/// Extract the update version from a filename. Independent of title-ID
/// extraction, so a file can yield one without the other.
pub fn extract_version(filename: &str) -> Option<String> {
    for rule in VERSION_RULES.iter() {
        if let Some(caps) = rule.captures(filename) {
            return Some(normalize_version(&caps[1]));
        }
    }
    None
}

/// Convert a four-digit version token to dotted form: `"0600"` -> `"06.00"`.
/// Already-dotted versions pass through untouched.
fn normalize_version(raw: &str) -> String {
    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        format!("{}.{}", &raw[..2], &raw[2..])
    } else {
        raw.to_string()
    }
}

/// Parse a filename into its title ID and version components.
pub fn parse_filename(filename: &str) -> ParsedFilename {
    ParsedFilename {
        title_id: extract_title_id(filename),
        version: extract_version(filename),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_id_filename() {
        let parsed = parse_filename("EP9000-BCES00011_00-SINGSTARPS3V0600-A0600-V0100-PE.pkg");
        assert_eq!(parsed.title_id.unwrap().as_str(), "BCES-00011");
        assert_eq!(parsed.version.as_deref(), Some("06.00"));
    }

    #[test]
    fn test_parse_bare_title_id() {
        let parsed = parse_filename("BCES-00081 patch.pkg");
        assert_eq!(parsed.title_id.unwrap().as_str(), "BCES-00081");
        assert_eq!(parsed.version, None);
    }

    #[test]
    fn test_parse_unseparated_title_id() {
        let parsed = parse_filename("BCUS98148_update.pkg");
        assert_eq!(parsed.title_id.unwrap().as_str(), "BCUS-98148");
    }

    #[test]
    fn test_content_id_embedded_title_id() {
        let parsed = parse_filename("UP9000-BCUS98148_00-DEMONSSOULS00000-A0126-V0100.pkg");
        assert_eq!(parsed.title_id.unwrap().as_str(), "BCUS-98148");
        // "V0100" outranks the "-A0126-" activation token
        assert_eq!(parsed.version.as_deref(), Some("01.00"));
    }

    #[test]
    fn test_version_dotted_lowercase() {
        assert_eq!(extract_version("game v1.20 update.pkg").as_deref(), Some("1.20"));
    }

    #[test]
    fn test_version_underscore_delimited() {
        assert_eq!(extract_version("killzone2_01.29_eu.pkg").as_deref(), Some("01.29"));
    }

    #[test]
    fn test_version_activation_token() {
        assert_eq!(extract_version("SOMETHING-A0126-PE.pkg").as_deref(), Some("01.26"));
    }

    #[test]
    fn test_no_title_id() {
        let parsed = parse_filename("random_download.pkg");
        assert_eq!(parsed.title_id, None);
    }

    #[test]
    fn test_no_version() {
        assert_eq!(extract_version("BCES-00081 patch.pkg"), None);
    }
}
