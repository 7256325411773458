//! Package manager backend port and capability traits
//!
//! A backend adapter (pip, and whatever comes after it) plugs into
//! [`PackageManager`](super::PackageManager) by implementing [`Backend`]. Each
//! operation the contract can delegate is its own capability trait, and the
//! backend hands out a trait object for every capability it supports.
//! A capability that isn't implemented is reported as `None`, which the
//! contract turns into an explicit error instead of a panic.

use std::fmt;

use async_trait::async_trait;

use super::error::PackageManagerError;

/// A named operation a backend may or must implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Present,
    PackagesByName,
    PackageStatus,
    InstallPackage,
    PackageDependencies,
}

impl Capability {
    /// Capabilities every backend must provide, in the order they're checked
    pub const REQUIRED: [Capability; 4] = [
        Capability::Present,
        Capability::PackagesByName,
        Capability::PackageStatus,
        Capability::InstallPackage,
    ];

    #[must_use]
    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Present => "present",
            Capability::PackagesByName => "packages_by_name",
            Capability::PackageStatus => "package_status",
            Capability::InstallPackage => "install_package",
            Capability::PackageDependencies => "package_dependencies",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Captured output of a successful install
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstallOutput {
    pub stdout: String,
    pub stderr: String,
}

/// A bare name/version pair reported by a backend
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId {
    pub name: String,
    pub version: String,
}

impl PackageId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Checks whether the backend tool is installed and usable.
#[async_trait]
pub trait PresenceCheck: Send + Sync {
    async fn present(&self) -> Result<bool, PackageManagerError>;
}

/// Lists every version of a package the backend knows about.
#[async_trait]
pub trait VersionLookup: Send + Sync {
    /// Versions in the order the backend reports them; empty if the package
    /// has no releases.
    async fn versions(&self, name: &str) -> Result<Vec<String>, PackageManagerError>;
}

/// Reports which version of a package, if any, is installed locally.
#[async_trait]
pub trait StatusLookup: Send + Sync {
    /// `Ok(None)` means "not installed"; that is not an error.
    async fn installed_version(&self, name: &str) -> Result<Option<String>, PackageManagerError>;
}

/// Installs an exact package version on the local machine.
#[async_trait]
pub trait Installer: Send + Sync {
    async fn install(&self, name: &str, version: &str)
    -> Result<InstallOutput, PackageManagerError>;
}

/// Looks up the direct dependencies of one package version.
#[async_trait]
pub trait DependencyLookup: Send + Sync {
    async fn dependencies(
        &self,
        name: &str,
        version: &str,
    ) -> Result<Vec<PackageId>, PackageManagerError>;
}

/// Port for package manager backends (Hexagonal Architecture)
///
/// Every accessor returns the capability implementation, or `None` when the
/// backend doesn't support it. The four required capabilities are checked by
/// [`PackageManager::valid_implementation`](super::PackageManager::valid_implementation)
/// before every operation. [`dependency_lookup`](Backend::dependency_lookup)
/// is optional and defaults to `None`.
pub trait Backend: Send + Sync {
    /// Short name of the backend tool, e.g. `pip`
    fn name(&self) -> &str;

    fn presence_check(&self) -> Option<&dyn PresenceCheck>;

    fn version_lookup(&self) -> Option<&dyn VersionLookup>;

    fn status_lookup(&self) -> Option<&dyn StatusLookup>;

    fn installer(&self) -> Option<&dyn Installer>;

    fn dependency_lookup(&self) -> Option<&dyn DependencyLookup> {
        None
    }
}
