//! Package entities returned by the package manager contract
//!
//! These are plain records. They're only ever built by
//! [`PackageManager`] operations, and each one keeps a handle to the manager
//! that produced it for follow-up queries.

use std::fmt;

use crate::package_manager::{PackageManager, PackageManagerError};

/// Cached result of a dependency lookup
#[derive(Debug, Clone, Default)]
pub enum Dependencies {
    /// Not fetched yet
    #[default]
    Unresolved,

    /// Fetched from the package manager; never refreshed
    Resolved(Vec<PackageInfo>),
}

impl Dependencies {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The cached dependencies, if they've been fetched
    #[must_use]
    pub fn resolved(&self) -> Option<&[PackageInfo]> {
        match self {
            Self::Resolved(packages) => Some(packages),
            Self::Unresolved => None,
        }
    }
}

/// A single version of a package available from a package manager
#[derive(Clone)]
pub struct PackageInfo {
    name: String,
    version: String,
    package_manager: PackageManager,
    dependencies: Dependencies,
}

impl PackageInfo {
    pub(crate) fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        package_manager: PackageManager,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            package_manager,
            dependencies: Dependencies::Unresolved,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque, backend-defined version string
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn package_manager(&self) -> &PackageManager {
        &self.package_manager
    }

    /// Dependency cache as it stands, without fetching anything
    #[must_use]
    pub fn dependencies(&self) -> &Dependencies {
        &self.dependencies
    }

    /// Fetches this package's dependencies on first call and caches them
    ///
    /// Later calls return the cached list without asking the package manager
    /// again. Build a fresh entity for up-to-date results.
    ///
    /// # Errors
    ///
    /// Whatever [`PackageManager::package_dependencies`] returns. The cache
    /// stays unresolved on failure.
    pub async fn resolve_dependencies(&mut self) -> Result<&[PackageInfo], PackageManagerError> {
        if !self.dependencies.is_resolved() {
            let resolved = self.package_manager.package_dependencies(self).await?;
            self.dependencies = Dependencies::Resolved(resolved);
        }

        Ok(self.dependencies.resolved().unwrap_or_default())
    }
}

impl PartialEq for PackageInfo {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.version == other.version
            && self.package_manager.same_backend(&other.package_manager)
    }
}

impl Eq for PackageInfo {}

impl fmt::Debug for PackageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageInfo")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("package_manager", &self.package_manager.name())
            .field("dependencies", &self.dependencies)
            .finish()
    }
}

impl fmt::Display for PackageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// The state of a package on the local machine
#[derive(Clone)]
pub struct PackageStatus {
    name: String,
    installed_version: Option<String>,
    package_manager: PackageManager,
}

impl PackageStatus {
    pub(crate) fn new(
        name: impl Into<String>,
        installed_version: Option<String>,
        package_manager: PackageManager,
    ) -> Self {
        Self {
            name: name.into(),
            installed_version,
            package_manager,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The installed version, or `None` if the package isn't installed
    #[must_use]
    pub fn installed_version(&self) -> Option<&str> {
        self.installed_version.as_deref()
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.installed_version.is_some()
    }

    #[must_use]
    pub fn package_manager(&self) -> &PackageManager {
        &self.package_manager
    }
}

impl fmt::Debug for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageStatus")
            .field("name", &self.name)
            .field("installed_version", &self.installed_version)
            .field("package_manager", &self.package_manager.name())
            .finish()
    }
}
