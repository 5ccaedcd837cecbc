//! Plan execution: optional backup, then the renames.

use std::fs;
use std::path::PathBuf;

use crate::audit::{AuditLevel, AuditLog};
use crate::error::RenameError;
use crate::planner::RenamePlan;
use crate::scanner::BACKUP_DIR_NAME;

/// Options controlling plan execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteOptions {
    /// Copy originals into `backup_before_rename/` before renaming
    pub backup: bool,
}

/// Outcome of one attempted rename.
#[derive(Debug, Clone)]
pub struct RenameOutcome {
    pub source: PathBuf,
    pub target: PathBuf,
    pub error: Option<String>,
}

impl RenameOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Execute the `Ready` entries of a plan, in plan order.
///
/// With backup enabled, every ready source is copied into the backup
/// directory before the first rename. Any copy failure aborts the whole
/// batch with nothing renamed. Individual rename failures after that point
/// are recorded and the batch continues. Every attempt lands in the audit
/// log.
pub fn execute_plan(
    plan: &RenamePlan,
    options: ExecuteOptions,
    audit: &mut AuditLog,
) -> Result<Vec<RenameOutcome>, RenameError> {
    if options.backup {
        backup_ready_files(plan, audit)?;
    }

    let mut outcomes = Vec::new();

    for entry in plan.ready_entries() {
        // Ready entries always carry a proposed name
        let Some(target) = entry.target_path() else {
            continue;
        };

        // Re-check the target right before renaming; the plan may be stale
        let result = if target.exists() {
            Err(format!("target already exists: {}", target.display()))
        } else {
            fs::rename(&entry.source, &target).map_err(|e| e.to_string())
        };

        let target_name = target.file_name().and_then(|n| n.to_str()).unwrap_or("?");
        match &result {
            Ok(()) => {
                audit.record(
                    AuditLevel::Info,
                    format!("Renamed \"{}\" -> \"{}\"", entry.source_name(), target_name),
                )?;
            }
            Err(msg) => {
                audit.record(
                    AuditLevel::Error,
                    format!("Failed to rename \"{}\": {}", entry.source_name(), msg),
                )?;
            }
        }

        outcomes.push(RenameOutcome {
            source: entry.source.clone(),
            target,
            error: result.err(),
        });
    }

    Ok(outcomes)
}

/// Copy every ready source into the backup directory. The first copy error
/// fails the whole batch.
fn backup_ready_files(plan: &RenamePlan, audit: &mut AuditLog) -> Result<(), RenameError> {
    let backup_dir = plan.dir.join(BACKUP_DIR_NAME);
    fs::create_dir_all(&backup_dir).map_err(|e| {
        RenameError::backup(format!("could not create {}: {}", backup_dir.display(), e))
    })?;

    for entry in plan.ready_entries() {
        let dest = backup_dir.join(entry.source_name());
        if let Err(e) = fs::copy(&entry.source, &dest) {
            let msg = format!("could not copy \"{}\": {}", entry.source_name(), e);
            audit.record(AuditLevel::Error, format!("Backup aborted: {msg}"))?;
            return Err(RenameError::backup(msg));
        }
    }

    audit.record(
        AuditLevel::Info,
        format!("Backup created in {}", backup_dir.display()),
    )?;
    Ok(())
}
