/// Errors that can occur while planning or executing renames.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] pkg_rename_db::DbError),

    #[error("Error scanning {path}: {message}")]
    Scan { path: String, message: String },

    #[error("Backup failed, no files were renamed: {0}")]
    Backup(String),
}

impl RenameError {
    pub fn scan(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Scan {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn backup(msg: impl Into<String>) -> Self {
        Self::Backup(msg.into())
    }
}
