//! Deployment and archive errors

use super::ModularError;

/// Creates a deployment not found error
pub fn not_found(path: impl Into<String>) -> ModularError {
    ModularError::DeploymentNotFound { path: path.into() }
}

/// Creates an already set up error
pub fn already_set_up(count: usize) -> ModularError {
    ModularError::AlreadySetUp { count }
}

/// Creates an invalid archive error
pub fn archive_invalid(path: impl Into<String>, reason: impl Into<String>) -> ModularError {
    ModularError::ArchiveInvalid {
        path: path.into(),
        reason: reason.into(),
    }
}
