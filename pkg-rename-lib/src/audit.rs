//! Persistent audit log of rename operations.
//!
//! Appends timestamped plaintext lines so a batch can be reviewed after the
//! fact. The CLI defaults the log to `rename_log.txt` in the target
//! directory.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::planner::{PlanStatus, RenamePlan};

/// Severity tag written before each message.
#[derive(Debug, Clone, Copy)]
pub enum AuditLevel {
    Info,
    Warning,
    Error,
}

impl AuditLevel {
    fn tag(self) -> &'static str {
        match self {
            AuditLevel::Info => "INFO",
            AuditLevel::Warning => "WARNING",
            AuditLevel::Error => "ERROR",
        }
    }
}

/// Append-only audit log.
#[derive(Debug)]
pub struct AuditLog {
    file: File,
}

impl AuditLog {
    /// Open (or create) the audit log at `path` for appending.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Append one timestamped line: `YYYY-MM-DD HH:MM:SS [LEVEL] message`.
    pub fn record(&mut self, level: AuditLevel, message: impl AsRef<str>) -> std::io::Result<()> {
        writeln!(
            self.file,
            "{} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            level.tag(),
            message.as_ref(),
        )
    }

    /// Write the analysis result: summary counts plus one line per entry
    /// that needs attention.
    pub fn record_plan(&mut self, plan: &RenamePlan) -> std::io::Result<()> {
        let summary = plan.summary();
        self.record(
            AuditLevel::Info,
            format!(
                "Analyzed {}: {} ready, {} skipped, {} warnings, {} errors",
                plan.dir.display(),
                summary.ready,
                summary.skipped,
                summary.warnings,
                summary.errors,
            ),
        )?;

        for entry in &plan.entries {
            match entry.status {
                PlanStatus::Ready | PlanStatus::Skip => {}
                PlanStatus::Warning => {
                    self.record(
                        AuditLevel::Warning,
                        format!("{}: {}", entry.source_name(), entry.reason),
                    )?;
                }
                PlanStatus::Error => {
                    self.record(
                        AuditLevel::Error,
                        format!("{}: {}", entry.source_name(), entry.reason),
                    )?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_tagged_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rename_log.txt");

        {
            let mut log = AuditLog::open(&path).unwrap();
            log.record(AuditLevel::Info, "first run").unwrap();
        }
        {
            let mut log = AuditLog::open(&path).unwrap();
            log.record(AuditLevel::Error, "second run").unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[INFO] first run"), "line: {}", lines[0]);
        assert!(lines[1].contains("[ERROR] second run"), "line: {}", lines[1]);
        // Timestamp prefix: "YYYY-MM-DD HH:MM:SS"
        assert_eq!(lines[0].as_bytes()[4], b'-');
        assert_eq!(lines[0].as_bytes()[10], b' ');
    }
}
