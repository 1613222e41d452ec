//! Reverse resolution: removal ordering
//!
//! Finds every package that transitively depends on a target, ordered so
//! that each dependent comes before anything it depends on. The caller
//! removes the returned packages first and the target last.

use std::collections::HashSet;

use super::resolve;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::package::Package;

/// Packages that transitively depend on `target`, most dependent first
///
/// `target` itself is never part of the result. The order is derived from
/// the reversed forward plan, so it is deterministic for a given catalog.
///
/// # Errors
///
/// Returns the forward resolution error if `catalog` cannot be linearized.
///
/// # Example
///
/// ```text
/// Catalog: core, ui(core), reports(ui), audit(core)
///
/// resolve_dependents(core) => [audit, reports, ui]
/// ```
pub fn resolve_dependents(catalog: &Catalog, target: &Package) -> Result<Vec<Package>> {
    let plan = resolve(catalog)?;
    let by_most_dependent_first: Vec<&Package> = plan.iter().rev().collect();

    let mut collected: Vec<&Package> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    collect(
        &target.name,
        &by_most_dependent_first,
        &mut seen,
        &mut collected,
    );

    Ok(collected.into_iter().cloned().collect())
}

/// Append every dependent of `dependency`, each after its own dependents
///
/// A package already collected is skipped. Its first placement already
/// follows all of its dependents, so revisiting it would only add duplicates.
fn collect<'a>(
    dependency: &str,
    order: &[&'a Package],
    seen: &mut HashSet<&'a str>,
    collected: &mut Vec<&'a Package>,
) {
    for &candidate in order {
        if !candidate.depends_on(dependency) || seen.contains(candidate.name.as_str()) {
            continue;
        }
        collect(&candidate.name, order, seen, collected);
        if seen.insert(candidate.name.as_str()) {
            collected.push(candidate);
        }
    }
}
