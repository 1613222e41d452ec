//! File system errors

use std::path::Path;

use super::ModularError;

/// Creates a file not found error
pub fn not_found(path: &Path) -> ModularError {
    ModularError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> ModularError {
    ModularError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> ModularError {
    ModularError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
