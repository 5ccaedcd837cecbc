use std::io::Write;
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pkg_rename_lib::audit::{AuditLevel, AuditLog};
use pkg_rename_lib::executor::{ExecuteOptions, execute_plan};
use pkg_rename_lib::planner::{PlanProgress, PlanStatus, RenamePlan, plan_renames};
use pkg_rename_lib::scanner::BACKUP_DIR_NAME;

use crate::error::CliError;

pub(crate) struct RenameArgs {
    pub dir: Option<PathBuf>,
    pub db: Option<PathBuf>,
    pub dry_run: bool,
    pub backup: bool,
    pub no_backup: bool,
    pub yes: bool,
    pub audit_log: Option<PathBuf>,
    pub quiet: bool,
}

pub(crate) fn run(args: RenameArgs) -> Result<(), CliError> {
    let dir = match args.dir {
        Some(d) => d,
        None => prompt_directory()?,
    };
    if !dir.is_dir() {
        return Err(CliError::config(format!("not a directory: {}", dir.display())));
    }

    let index = crate::commands::load_index(args.db)?;

    log::info!(
        "{} titles loaded, analyzing {}",
        index.len(),
        dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if args.dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be renamed".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    // Progress spinner (hidden in quiet mode)
    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("/-\\|"),
        );
        pb
    };

    let progress_callback = |progress: PlanProgress| match progress {
        PlanProgress::Scanning { file_count } => {
            pb.set_message(format!("Found {file_count} .pkg files"));
            pb.tick();
        }
        PlanProgress::Analyzing {
            ref file_name,
            file_index,
            total,
        } => {
            pb.set_message(format!("[{}/{}] Analyzing {}", file_index + 1, total, file_name));
            pb.tick();
        }
        PlanProgress::Done => {
            pb.finish_and_clear();
        }
    };

    let plan = plan_renames(&dir, &index, &progress_callback)?;
    pb.finish_and_clear();

    if plan.entries.is_empty() {
        log::info!(
            "{}",
            "No .pkg files found.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    print_plan(&plan);

    let audit_path = args.audit_log.unwrap_or_else(|| dir.join("rename_log.txt"));
    let mut audit = AuditLog::open(&audit_path)?;
    audit.record_plan(&plan)?;

    let summary = plan.summary();
    if summary.ready == 0 {
        log::info!("{}", "Nothing to rename.".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }
    if args.dry_run {
        return Ok(());
    }

    // Backup decision: flags win, prompt otherwise
    let backup = if args.backup {
        true
    } else if args.no_backup {
        false
    } else {
        confirm(&format!("Copy originals to {BACKUP_DIR_NAME}/ before renaming?"))?
    };

    if !args.yes && !confirm(&format!("Proceed with {} renames?", summary.ready))? {
        log::info!("  {}", "Skipped".if_supports_color(Stdout, |t| t.dimmed()));
        audit.record(AuditLevel::Info, "Cancelled by user")?;
        return Ok(());
    }

    let outcomes = execute_plan(&plan, ExecuteOptions { backup }, &mut audit)?;

    let renamed = outcomes.iter().filter(|o| o.succeeded()).count();

    log::info!("");
    log::info!(
        "  {} {} files renamed",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        renamed,
    );
    for outcome in outcomes.iter().filter(|o| !o.succeeded()) {
        let name = outcome
            .source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("?");
        log::warn!(
            "  {} {}: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            name,
            outcome.error.as_deref().unwrap_or("unknown error"),
        );
    }
    if summary.warnings > 0 {
        log::warn!(
            "  {} {} files need attention, see {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            summary.warnings,
            audit_path.display(),
        );
    }

    Ok(())
}

/// Print the plan, one line per file.
fn print_plan(plan: &RenamePlan) {
    for entry in &plan.entries {
        match entry.status {
            PlanStatus::Ready => {
                log::info!(
                    "  {} {} {} {}",
                    "\u{2192}".if_supports_color(Stdout, |t| t.green()),
                    entry.source_name().if_supports_color(Stdout, |t| t.dimmed()),
                    "\u{2192}".if_supports_color(Stdout, |t| t.green()),
                    entry
                        .proposed
                        .as_deref()
                        .unwrap_or("?")
                        .if_supports_color(Stdout, |t| t.bold()),
                );
            }
            PlanStatus::Skip => {}
            PlanStatus::Warning => {
                log::warn!(
                    "  {} {} ({})",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    entry.source_name().if_supports_color(Stdout, |t| t.dimmed()),
                    entry.reason,
                );
            }
            PlanStatus::Error => {
                log::warn!(
                    "  {} {} ({})",
                    "?".if_supports_color(Stdout, |t| t.yellow()),
                    entry.source_name().if_supports_color(Stdout, |t| t.dimmed()),
                    entry.reason,
                );
            }
        }
    }

    let summary = plan.summary();
    if summary.skipped > 0 {
        log::info!(
            "  {} {} already correctly named",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.skipped,
        );
    }

    log::info!("");
    log::info!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} ready, {} skipped, {} warnings, {} errors",
        summary.ready,
        summary.skipped,
        summary.warnings,
        summary.errors,
    );
}

/// Ask for the target directory when none was given on the command line.
fn prompt_directory() -> Result<PathBuf, CliError> {
    print!("Path to the folder containing .pkg files: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CliError::config("no directory given"));
    }
    Ok(PathBuf::from(trimmed))
}

/// Ask a y/N question on stdin.
fn confirm(question: &str) -> Result<bool, CliError> {
    print!("\n  {question} [y/N] ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}
