//! Dependency resolution for catalogs
//!
//! This module handles:
//! - Ordering a catalog so every dependency is installed first
//! - Enforcing minimum dependency versions while ordering
//! - Reporting missing dependencies and cycles as one resolution error
//! - Computing the removal order for a package and its dependents

pub mod dependents;
pub mod plan;
pub mod sort;

pub use dependents::resolve_dependents;
pub use plan::InstallationPlan;
pub use sort::resolve;
