//! Version errors

use super::ModularError;

/// Creates a malformed version error
pub fn malformed(version: impl Into<String>, reason: impl Into<String>) -> ModularError {
    ModularError::MalformedVersion {
        version: version.into(),
        reason: reason.into(),
    }
}
