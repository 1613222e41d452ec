//! Forward resolution: catalog to installation plan
//!
//! ## Algorithm
//!
//! An iterative fixed point over catalog indices:
//!
//! 1. Packages without dependencies are placed first, in catalog order.
//! 2. Each pass walks the still-unplaced packages in order and places every
//!    package whose dependencies are all placed at a satisfying version.
//!    Packages placed earlier in the same pass count immediately.
//! 3. A pass that places nothing means no further pass can either; the first
//!    unplaced package and its first unsatisfied dependency are reported.
//!
//! Missing dependencies, version shortfalls and cycles all end in the same
//! "cannot progress" state and the same error shape.
//!
//! Worst case is O(n²) passes over the catalog. This only runs during
//! administrative installs and removals.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::InstallationPlan;
use crate::catalog::Catalog;
use crate::error::{self, Result};
use crate::package::Package;
use crate::version;

/// Placed package name to its version
type Placed<'a> = HashMap<&'a str, &'a str>;

/// Linearize `catalog` so every dependency precedes its dependents
///
/// Deterministic: the same catalog in the same order always yields the same
/// plan.
///
/// # Errors
///
/// Returns `ResolutionError` naming the first package that can never be
/// placed and its first unsatisfied dependency, or `MalformedVersion` if a
/// version comparison fails.
///
/// # Example
///
/// ```text
/// Catalog: [reports(ui >= 1.0.0), core, ui(core >= 1.0.0)]
///
/// Pass 0 (no deps):  [core]
/// Pass 1:            [core, ui, ...]   reports waits, ui is placed after it
/// Pass 2:            [core, ui, reports]
/// ```
pub fn resolve(catalog: &Catalog) -> Result<InstallationPlan> {
    let packages = catalog.packages();

    let (mut order, mut remaining): (Vec<usize>, Vec<usize>) =
        (0..packages.len()).partition(|&idx| packages[idx].dependencies.is_empty());

    let mut placed: Placed = order
        .iter()
        .map(|&idx| (packages[idx].name.as_str(), packages[idx].version.as_str()))
        .collect();

    let mut pass = 0usize;
    while !remaining.is_empty() {
        pass += 1;
        let before = remaining.len();
        let mut stalled = Vec::with_capacity(before);

        for idx in remaining {
            let package = &packages[idx];
            if first_unsatisfied(package, &placed)?.is_none() {
                placed.insert(package.name.as_str(), package.version.as_str());
                order.push(idx);
            } else {
                stalled.push(idx);
            }
        }

        remaining = stalled;
        debug!(
            "Resolution pass {pass}: placed {}, {} remaining",
            before - remaining.len(),
            remaining.len()
        );

        if remaining.len() == before {
            return Err(stuck_error(catalog, &packages[remaining[0]], &placed)?);
        }
    }

    Ok(InstallationPlan::from_ordered(
        order.into_iter().map(|idx| packages[idx].clone()).collect(),
    ))
}

/// Why a dependency is not yet satisfied
enum Unsatisfied {
    NotPlaced,
    TooOld { required: String, actual: String },
}

/// First dependency of `package`, by name, that `placed` does not satisfy
fn first_unsatisfied<'p>(
    package: &'p Package,
    placed: &Placed,
) -> Result<Option<(&'p str, Unsatisfied)>> {
    for (dependency, required) in &package.dependencies {
        match placed.get(dependency.as_str()) {
            None => return Ok(Some((dependency, Unsatisfied::NotPlaced))),
            Some(actual) if !version::at_least(actual, required)? => {
                return Ok(Some((
                    dependency,
                    Unsatisfied::TooOld {
                        required: required.clone(),
                        actual: (*actual).to_string(),
                    },
                )));
            }
            Some(_) => {}
        }
    }
    Ok(None)
}

fn stuck_error(
    catalog: &Catalog,
    package: &Package,
    placed: &Placed,
) -> Result<crate::error::ModularError> {
    let Some((dependency, why)) = first_unsatisfied(package, placed)? else {
        return Ok(error::deps::unresolvable(
            &package.name,
            "",
            "could not be ordered",
        ));
    };

    let reason = match why {
        Unsatisfied::TooOld { required, actual } => {
            format!("requires >= {required}, but the catalog has {actual}")
        }
        Unsatisfied::NotPlaced if !catalog.contains(dependency) => {
            "is not in the catalog".to_string()
        }
        Unsatisfied::NotPlaced if reaches(catalog, dependency, &package.name) => {
            "forms a dependency cycle".to_string()
        }
        Unsatisfied::NotPlaced => "can never be installed".to_string(),
    };

    Ok(error::deps::unresolvable(&package.name, dependency, reason))
}

/// Whether `target` is reachable from `from` by following dependencies
fn reaches(catalog: &Catalog, from: &str, target: &str) -> bool {
    let mut stack = vec![from];
    let mut visited = HashSet::new();

    while let Some(name) = stack.pop() {
        if name == target {
            return true;
        }
        if !visited.insert(name) {
            continue;
        }
        if let Some(package) = catalog.get(name) {
            stack.extend(package.dependencies.keys().map(String::as_str));
        }
    }
    false
}
