//! Package catalogs
//!
//! A [`Catalog`] is the ordered set of package descriptors a resolver run
//! works on. Order is significant: the resolver is stable with respect to it,
//! so discovery must produce packages in a deterministic order.
//!
//! Catalogs are rebuilt for every operation and never cached, because the
//! set of known packages changes with every install and uninstall.

pub mod discovery;
pub mod store;

use std::collections::HashSet;

use crate::error::{self, Result};
use crate::package::Package;

pub use discovery::{DirectoryDiscovery, Discover};
pub use store::{CatalogStore, INSTALLED_FILE, InstalledStore};

/// Ordered collection of uniquely named packages
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    packages: Vec<Package>,
}

impl Catalog {
    /// Build a catalog, validating every descriptor
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePackage` if two packages share a name, or the
    /// validation error of the first invalid descriptor.
    pub fn new(packages: Vec<Package>) -> Result<Self> {
        let mut seen = HashSet::new();
        for package in &packages {
            package.validate()?;
            if !seen.insert(package.name.as_str()) {
                return Err(error::package::duplicate(&package.name));
            }
        }
        Ok(Self { packages })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Package> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Find a package by name
    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<String> {
        self.packages.iter().map(|p| p.name.clone()).collect()
    }

    /// Copy of this catalog without the named packages, order preserved
    pub fn without(&self, excluded: &[String]) -> Self {
        Self {
            packages: self
                .packages
                .iter()
                .filter(|p| !excluded.contains(&p.name))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Package;
    type IntoIter = std::slice::Iter<'a, Package>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.iter()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::ModularError;

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![
            Package::new("b", "1.0.0", "v"),
            Package::new("a", "1.0.0", "v"),
        ])
        .expect("valid catalog");

        assert_eq!(catalog.names(), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("a"));
        assert!(catalog.get("c").is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let err = Catalog::new(vec![
            Package::new("core", "1.0.0", "v"),
            Package::new("core", "2.0.0", "v"),
        ])
        .expect_err("duplicate names must fail");

        assert!(matches!(err, ModularError::DuplicatePackage { name } if name == "core"));
    }

    #[test]
    fn test_catalog_validates_descriptors() {
        let err = Catalog::new(vec![Package::new("core", "1.0.beta", "v")])
            .expect_err("malformed version must fail");
        assert!(matches!(err, ModularError::MalformedVersion { .. }));
    }

    #[test]
    fn test_without_excludes_names() {
        let catalog = Catalog::new(vec![
            Package::new("a", "1.0.0", "v"),
            Package::new("b", "1.0.0", "v"),
            Package::new("c", "1.0.0", "v"),
        ])
        .expect("valid catalog");

        let trimmed = catalog.without(&["b".to_string()]);
        assert_eq!(trimmed.names(), vec!["a".to_string(), "c".to_string()]);
    }
}
