//! Package and catalog errors

use super::ModularError;

/// Creates an invalid package error
pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> ModularError {
    ModularError::InvalidPackage {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates a duplicate package error
pub fn duplicate(name: impl Into<String>) -> ModularError {
    ModularError::DuplicatePackage { name: name.into() }
}

/// Creates a package not installed error
pub fn not_installed(name: impl Into<String>) -> ModularError {
    ModularError::PackageNotInstalled { name: name.into() }
}

/// Creates a package already installed error
pub fn already_installed(name: impl Into<String>) -> ModularError {
    ModularError::PackageAlreadyInstalled { name: name.into() }
}
