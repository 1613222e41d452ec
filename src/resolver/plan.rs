//! Installation plans

use crate::package::Package;

/// Dependency-respecting linearization of a catalog
///
/// For every package in the plan, each of its dependencies appears strictly
/// earlier. Plans are only produced by [`super::resolve`].
#[derive(Debug, Clone, Default)]
pub struct InstallationPlan {
    packages: Vec<Package>,
}

impl InstallationPlan {
    pub(super) fn from_ordered(packages: Vec<Package>) -> Self {
        Self { packages }
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

    pub fn names(&self) -> Vec<String> {
        self.packages.iter().map(|p| p.name.clone()).collect()
    }

    /// Index of the package named `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.packages.iter().position(|p| p.name == name)
    }
}

impl<'a> IntoIterator for &'a InstallationPlan {
    type Item = &'a Package;
    type IntoIter = std::slice::Iter<'a, Package>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.iter()
    }
}
