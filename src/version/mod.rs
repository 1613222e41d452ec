//! Dotted package versions
//!
//! Versions are up to three unsigned integer components (`major.minor.patch`).
//! Missing trailing components count as zero, so `"1.2"` equals `"1.2.0"`.
//! Ordering is lexicographic over the components.

use std::fmt;
use std::str::FromStr;

use crate::error::{self, ModularError, Result};

/// Maximum number of dotted components in a version
const MAX_COMPONENTS: usize = 3;

/// A parsed `major.minor.patch` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted version string
    ///
    /// # Errors
    ///
    /// Returns `MalformedVersion` if the string is empty, has more than three
    /// components, or any component is not a non-negative integer.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(error::version::malformed(input, "version is empty"));
        }

        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() > MAX_COMPONENTS {
            return Err(error::version::malformed(
                input,
                format!("expected at most {MAX_COMPONENTS} components"),
            ));
        }

        let mut components = [0u64; MAX_COMPONENTS];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = parse_component(input, part)?;
        }

        Ok(Self::new(components[0], components[1], components[2]))
    }
}

fn parse_component(input: &str, part: &str) -> Result<u64> {
    // u64::from_str accepts a leading '+', which is not a version digit
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(error::version::malformed(
            input,
            format!("component '{part}' is not a non-negative integer"),
        ));
    }
    part.parse::<u64>()
        .map_err(|e| error::version::malformed(input, e.to_string()))
}

impl FromStr for Version {
    type Err = ModularError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Check whether `actual` satisfies the minimum version `required`
///
/// # Errors
///
/// Returns `MalformedVersion` if either string cannot be parsed.
///
/// # Example
///
/// ```text
/// at_least("1.2.3", "1.2.0") => true
/// at_least("1.2.0", "1.2.3") => false
/// at_least("2.0.0", "1.9.9") => true
/// ```
pub fn at_least(actual: &str, required: &str) -> Result<bool> {
    Ok(Version::parse(actual)? >= Version::parse(required)?)
}
