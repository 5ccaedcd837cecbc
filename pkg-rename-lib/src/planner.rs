//! Rename planning.
//!
//! Every `.pkg` file in the target directory is classified before anything
//! is touched, so a whole batch can be previewed and confirmed up front.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pkg_rename_db::TitleIndex;

use crate::error::RenameError;
use crate::formatter::{self, FormattedName};
use crate::parser;
use crate::scanner;

/// Terminal classification for a planned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    /// Renames cleanly
    Ready,
    /// Already in canonical form, nothing to do
    Skip,
    /// Needs attention (missing version, name collision); not executed
    Warning,
    /// Could not be resolved (no title ID, unknown title ID)
    Error,
}

/// One file's analysis result.
#[derive(Debug, Clone)]
pub struct PlanEntry {
    /// Original file path
    pub source: PathBuf,
    /// Proposed target filename in the same directory, when one could be built
    pub proposed: Option<String>,
    /// Terminal classification
    pub status: PlanStatus,
    /// Explanation shown in the preview and audit log
    pub reason: String,
}

impl PlanEntry {
    /// Original filename for display.
    pub fn source_name(&self) -> &str {
        self.source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("?")
    }

    /// Full path of the proposed target, when present.
    pub fn target_path(&self) -> Option<PathBuf> {
        let name = self.proposed.as_ref()?;
        Some(self.source.with_file_name(name))
    }
}

/// Aggregate counts by status, for the preview summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanSummary {
    pub ready: usize,
    pub skipped: usize,
    pub warnings: usize,
    pub errors: usize,
}

/// Progress events reported while a plan is built.
#[derive(Debug, Clone)]
pub enum PlanProgress {
    /// Directory scan finished
    Scanning { file_count: usize },
    /// Analyzing one file
    Analyzing {
        file_name: String,
        file_index: usize,
        total: usize,
    },
    /// Plan complete
    Done,
}

/// A deterministic, ordered rename plan for one directory.
#[derive(Debug)]
pub struct RenamePlan {
    pub dir: PathBuf,
    pub entries: Vec<PlanEntry>,
}

impl RenamePlan {
    pub fn summary(&self) -> PlanSummary {
        let mut summary = PlanSummary::default();
        for entry in &self.entries {
            match entry.status {
                PlanStatus::Ready => summary.ready += 1,
                PlanStatus::Skip => summary.skipped += 1,
                PlanStatus::Warning => summary.warnings += 1,
                PlanStatus::Error => summary.errors += 1,
            }
        }
        summary
    }

    /// Entries the executor will actually rename.
    pub fn ready_entries(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries
            .iter()
            .filter(|e| e.status == PlanStatus::Ready)
    }
}

/// Analyze a directory and build a rename plan.
///
/// Per-file classification:
/// - `Skip`: already matches the canonical template
/// - `Error`: no title ID in the filename, or the title ID is not in the
///   database
/// - `Warning`: the version sentinel had to be used, or the proposed name
///   collides
/// - `Ready`: everything else
///
/// Collisions are computed across the whole batch after the per-file pass,
/// so every colliding entry is flagged, not just the later one.
pub fn plan_renames(
    dir: &Path,
    index: &TitleIndex,
    progress: &dyn Fn(PlanProgress),
) -> Result<RenamePlan, RenameError> {
    let files = scanner::scan_pkg_files(dir)
        .map_err(|e| RenameError::scan(dir.display().to_string(), e.to_string()))?;

    progress(PlanProgress::Scanning {
        file_count: files.len(),
    });

    let mut entries = Vec::with_capacity(files.len());
    for (i, path) in files.iter().enumerate() {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("?")
            .to_string();
        progress(PlanProgress::Analyzing {
            file_name: file_name.clone(),
            file_index: i,
            total: files.len(),
        });
        entries.push(classify_file(path, &file_name, index));
    }

    demote_collisions(dir, &mut entries);

    progress(PlanProgress::Done);
    log::debug!("Planned {} entries in {}", entries.len(), dir.display());

    Ok(RenamePlan {
        dir: dir.to_path_buf(),
        entries,
    })
}

fn classify_file(path: &Path, file_name: &str, index: &TitleIndex) -> PlanEntry {
    if formatter::is_canonical_name(file_name) {
        return PlanEntry {
            source: path.to_path_buf(),
            proposed: None,
            status: PlanStatus::Skip,
            reason: "already formatted".to_string(),
        };
    }

    let parsed = parser::parse_filename(file_name);

    let Some(title_id) = parsed.title_id else {
        return PlanEntry {
            source: path.to_path_buf(),
            proposed: None,
            status: PlanStatus::Error,
            reason: "no title ID found in filename".to_string(),
        };
    };

    let Some(record) = index.get(&title_id) else {
        return PlanEntry {
            source: path.to_path_buf(),
            proposed: None,
            status: PlanStatus::Error,
            reason: format!("title ID {title_id} not in database"),
        };
    };

    let FormattedName {
        name,
        version_fallback,
    } = formatter::format_name(record, parsed.version.as_deref());

    if version_fallback {
        PlanEntry {
            source: path.to_path_buf(),
            proposed: Some(name),
            status: PlanStatus::Warning,
            reason: format!(
                "no update version found, using {}",
                formatter::VERSION_SENTINEL
            ),
        }
    } else {
        PlanEntry {
            source: path.to_path_buf(),
            proposed: Some(name),
            status: PlanStatus::Ready,
            reason: String::new(),
        }
    }
}

/// Demote entries whose proposed target collides with another entry's
/// proposed target or with a file already on disk.
fn demote_collisions(dir: &Path, entries: &mut [PlanEntry]) {
    let mut target_counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries.iter() {
        if let Some(name) = entry.proposed.as_deref() {
            *target_counts.entry(name).or_default() += 1;
        }
    }
    let duplicated: Vec<String> = target_counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(name, _)| name.to_string())
        .collect();

    for entry in entries.iter_mut() {
        if !matches!(entry.status, PlanStatus::Ready | PlanStatus::Warning) {
            continue;
        }
        let Some(name) = entry.proposed.clone() else {
            continue;
        };

        let collision = if duplicated.contains(&name) {
            Some(format!("multiple files map to \"{name}\""))
        } else {
            let target = dir.join(&name);
            if target.exists() && target != entry.source {
                Some(format!("target \"{name}\" already exists"))
            } else {
                None
            }
        };

        if let Some(collision) = collision {
            entry.status = PlanStatus::Warning;
            entry.reason = if entry.reason.is_empty() {
                collision
            } else {
                format!("{}; {}", entry.reason, collision)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkg_rename_db::{TitleId, TitleRecord};
    use std::fs;

    fn index() -> TitleIndex {
        TitleIndex::from_records(vec![
            TitleRecord {
                title_id: TitleId::parse("BCES-00011").unwrap(),
                title_name: "SingStar PS3".to_string(),
                sony_name: Some("SingStar".to_string()),
                version: Some("06.00".to_string()),
            },
            TitleRecord {
                title_id: TitleId::parse("BCES-00081").unwrap(),
                title_name: "Killzone 2 EU".to_string(),
                sony_name: Some("Killzone 2".to_string()),
                version: Some("01.29".to_string()),
            },
            TitleRecord {
                title_id: TitleId::parse("NPEB-01202").unwrap(),
                title_name: "Versionless Game".to_string(),
                sony_name: None,
                version: None,
            },
        ])
    }

    fn plan_for(dir: &Path) -> RenamePlan {
        plan_renames(dir, &index(), &|_| {}).unwrap()
    }

    fn entry_for<'a>(plan: &'a RenamePlan, name: &str) -> &'a PlanEntry {
        plan.entries
            .iter()
            .find(|e| e.source_name() == name)
            .unwrap_or_else(|| panic!("no entry for {name}"))
    }

    #[test]
    fn test_plan_classifies_ready_skip_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("EP9000-BCES00011_00-SINGSTARPS3V0600-A0600-V0100-PE.pkg"),
            b"",
        )
        .unwrap();
        fs::write(
            dir.path().join("Killzone 2 [UPDATE 01.29][BCES-00081].pkg"),
            b"",
        )
        .unwrap();
        fs::write(dir.path().join("BCUS-99999 unknown.pkg"), b"").unwrap();
        fs::write(dir.path().join("mystery_download.pkg"), b"").unwrap();

        let plan = plan_for(dir.path());
        assert_eq!(
            plan.summary(),
            PlanSummary {
                ready: 1,
                skipped: 1,
                warnings: 0,
                errors: 2,
            }
        );

        let singstar = entry_for(&plan, "EP9000-BCES00011_00-SINGSTARPS3V0600-A0600-V0100-PE.pkg");
        assert_eq!(singstar.status, PlanStatus::Ready);
        assert_eq!(
            singstar.proposed.as_deref(),
            Some("SingStar [UPDATE 06.00][BCES-00011].pkg")
        );

        let canonical = entry_for(&plan, "Killzone 2 [UPDATE 01.29][BCES-00081].pkg");
        assert_eq!(canonical.status, PlanStatus::Skip);

        let unknown = entry_for(&plan, "BCUS-99999 unknown.pkg");
        assert_eq!(unknown.status, PlanStatus::Error);

        let mystery = entry_for(&plan, "mystery_download.pkg");
        assert_eq!(mystery.status, PlanStatus::Error);
    }

    #[test]
    fn test_plan_warns_on_version_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("NPEB-01202 dlc.pkg"), b"").unwrap();

        let plan = plan_for(dir.path());
        let entry = entry_for(&plan, "NPEB-01202 dlc.pkg");
        assert_eq!(entry.status, PlanStatus::Warning);
        assert_eq!(
            entry.proposed.as_deref(),
            Some("Versionless Game [UPDATE 00.00][NPEB-01202].pkg")
        );
    }

    #[test]
    fn test_plan_flags_all_colliding_entries() {
        let dir = tempfile::tempdir().unwrap();
        // Both resolve to the same Killzone 2 target name
        fs::write(dir.path().join("BCES-00081 patch a.pkg"), b"").unwrap();
        fs::write(dir.path().join("BCES00081_patch_b.pkg"), b"").unwrap();

        let plan = plan_for(dir.path());
        assert_eq!(plan.summary().warnings, 2);
        for name in ["BCES-00081 patch a.pkg", "BCES00081_patch_b.pkg"] {
            let entry = entry_for(&plan, name);
            assert_eq!(entry.status, PlanStatus::Warning, "entry: {name}");
            assert!(entry.reason.contains("multiple files"), "reason: {}", entry.reason);
        }
    }

    #[test]
    fn test_plan_warns_when_target_exists_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("BCES-00081 patch.pkg"), b"").unwrap();
        fs::write(
            dir.path().join("Killzone 2 [UPDATE 01.29][BCES-00081].pkg"),
            b"",
        )
        .unwrap();

        let plan = plan_for(dir.path());
        let entry = entry_for(&plan, "BCES-00081 patch.pkg");
        assert_eq!(entry.status, PlanStatus::Warning);
        assert!(entry.reason.contains("already exists"), "reason: {}", entry.reason);
    }

    #[test]
    fn test_unknown_title_never_ready() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("XXXX-12345-A0100-.pkg"), b"").unwrap();

        let plan = plan_for(dir.path());
        let entry = entry_for(&plan, "XXXX-12345-A0100-.pkg");
        assert_eq!(entry.status, PlanStatus::Error);
        assert_eq!(entry.proposed, None);
    }
}
