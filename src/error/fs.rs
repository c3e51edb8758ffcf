//! File system errors

use std::path::Path;

use super::AsarkitError;

/// Creates a read failure for `path`
pub fn read_failed(path: &Path, reason: impl ToString) -> AsarkitError {
    AsarkitError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a backup failure for `path`
pub fn backup_failed(path: &Path, reason: impl ToString) -> AsarkitError {
    AsarkitError::BackupFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error with operation context
pub fn io_error(operation: &str, path: &Path, err: impl std::fmt::Display) -> AsarkitError {
    AsarkitError::IoError {
        message: format!("{operation} {}: {err}", path.display()),
    }
}
