use thiserror::Error;

/// Errors that abort a CLI command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Title database failed to load
    #[error("Database error: {0}")]
    Database(#[from] pkg_rename_db::DbError),

    /// Planning or execution failed
    #[error("{0}")]
    Rename(#[from] pkg_rename_lib::RenameError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
