//! Lifecycle and module hook errors

use super::ModularError;
use crate::operations::Phase;

/// Wraps an error raised inside a lifecycle phase or module hook
///
/// `applied` lists the packages whose phases completed before the failure.
pub fn failure(
    phase: Phase,
    package: impl Into<String>,
    hook: Option<&str>,
    applied: &[String],
    source: ModularError,
) -> ModularError {
    ModularError::HookFailure {
        phase,
        package: package.into(),
        hook: hook.map(str::to_string),
        applied: applied.to_vec(),
        source: Box::new(source),
    }
}

/// Creates a duplicate hook error
pub fn duplicate(hook: impl Into<String>) -> ModularError {
    ModularError::DuplicateHook { hook: hook.into() }
}

/// Creates an unknown hook error
pub fn unknown(hook: impl Into<String>) -> ModularError {
    ModularError::UnknownHook { hook: hook.into() }
}
