//! Dependency errors

use super::ModularError;

/// Creates a resolution error naming the package that could not be placed
pub fn unresolvable(
    package: impl Into<String>,
    dependency: impl Into<String>,
    reason: impl Into<String>,
) -> ModularError {
    ModularError::ResolutionError {
        package: package.into(),
        dependency: dependency.into(),
        reason: reason.into(),
    }
}

/// Creates a dependency missing error
pub fn missing(package: impl Into<String>, dependency: impl Into<String>) -> ModularError {
    ModularError::DependencyMissing {
        package: package.into(),
        dependency: dependency.into(),
    }
}

/// Creates a dependency version mismatch error
pub fn version_mismatch(
    package: impl Into<String>,
    dependency: impl Into<String>,
    required: impl Into<String>,
    actual: impl Into<String>,
) -> ModularError {
    ModularError::DependencyVersionMismatch {
        package: package.into(),
        dependency: dependency.into(),
        required: required.into(),
        actual: actual.into(),
    }
}
