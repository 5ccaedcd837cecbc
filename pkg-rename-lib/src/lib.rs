//! Core library for renaming PS3 game-update `.pkg` files.
//!
//! The pipeline is scan -> parse -> format -> plan -> execute: scan a
//! directory for `.pkg` files, extract the title ID and version from each
//! filename, look the title up in the database, build the canonical target
//! name, and classify every file into a reviewable plan before any rename
//! happens.

pub mod audit;
pub mod error;
pub mod executor;
pub mod formatter;
pub mod parser;
pub mod planner;
pub mod scanner;
pub mod settings;

pub use error::RenameError;
pub use executor::{ExecuteOptions, RenameOutcome, execute_plan};
pub use parser::{ParsedFilename, parse_filename};
pub use planner::{PlanEntry, PlanProgress, PlanStatus, PlanSummary, RenamePlan, plan_renames};
