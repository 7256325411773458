//! The package manager contract
//!
//! [`PackageManager`] wraps a [`Backend`] and is the only way callers reach it.
//! Every operation is gated the same way, in this order:
//!
//! 1. [`valid_implementation`](PackageManager::valid_implementation): all
//!    required capabilities are present on the backend
//! 2. [`assert_present`](PackageManager::assert_present): the backend tool is
//!    actually usable
//! 3. delegation to the backend capability
//!
//! so a misconfigured adapter is always reported as such, and an unavailable
//! tool is reported before any real work is attempted.

pub mod error;
pub mod port;


use std::{fmt, sync::Arc};

use tracing::instrument;

pub use self::{
    error::PackageManagerError,
    port::{
        Backend, Capability, DependencyLookup, InstallOutput, Installer, PackageId,
        PresenceCheck, StatusLookup, VersionLookup,
    },
};

use crate::package::{PackageInfo, PackageStatus};

/// Version alias accepted by [`PackageManager::package_info`]
pub const LATEST: &str = "latest";

/// Handle to a package manager backend
///
/// Cheap to clone; clones share the same backend. Entities returned from
/// operations hold a clone so they can make follow-up queries.
#[derive(Clone)]
pub struct PackageManager {
    backend: Arc<dyn Backend>,
}

impl PackageManager {
    pub fn new<B>(backend: B) -> Self
    where
        B: Backend + 'static,
    {
        Self {
            backend: Arc::new(backend),
        }
    }

    #[must_use]
    pub fn from_arc(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Name of the backend tool
    #[must_use]
    pub fn name(&self) -> &str {
        self.backend.name()
    }

    /// `true` if both handles point at the same backend instance
    #[must_use]
    pub fn same_backend(&self, other: &PackageManager) -> bool {
        Arc::ptr_eq(&self.backend, &other.backend)
    }

    /// Checks that the backend implements every required capability
    ///
    /// Runs before every gated operation, not once per handle.
    ///
    /// # Errors
    ///
    /// Returns [`PackageManagerError::InvalidImplementation`] naming the first
    /// missing capability in [`Capability::REQUIRED`] order.
    pub fn valid_implementation(&self) -> Result<bool, PackageManagerError> {
        for capability in Capability::REQUIRED {
            let implemented = match capability {
                Capability::Present => self.backend.presence_check().is_some(),
                Capability::PackagesByName => self.backend.version_lookup().is_some(),
                Capability::PackageStatus => self.backend.status_lookup().is_some(),
                Capability::InstallPackage => self.backend.installer().is_some(),
                // Optional; checked where it's used
                Capability::PackageDependencies => true,
            };

            if !implemented {
                return Err(self.invalid_implementation(capability));
            }
        }

        Ok(true)
    }

    /// Asks the backend whether its tool is present and ready to use
    ///
    /// Validates the backend first, like every other operation.
    ///
    /// # Errors
    ///
    /// Fails if any required capability is missing, or if the check itself
    /// could not run.
    pub async fn present(&self) -> Result<bool, PackageManagerError> {
        self.valid_implementation()?;

        let presence = self
            .backend
            .presence_check()
            .ok_or_else(|| self.invalid_implementation(Capability::Present))?;

        presence.present().await
    }

    /// Fails with [`PackageManagerError::Unavailable`] unless the backend is present
    ///
    /// # Errors
    ///
    /// See [`present`](Self::present).
    pub async fn assert_present(&self) -> Result<(), PackageManagerError> {
        if self.present().await? {
            Ok(())
        } else {
            Err(PackageManagerError::Unavailable {
                manager: self.name().to_string(),
            })
        }
    }

    /// Every version of `name` the backend knows about
    ///
    /// Returns an empty list, not an error, when the package has no versions.
    /// Results are never cached.
    ///
    /// # Errors
    ///
    /// Fails on any gating failure or backend error.
    #[instrument(skip(self), fields(manager = %self.name()))]
    pub async fn packages_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<PackageInfo>, PackageManagerError> {
        self.gate().await?;

        let lookup = self
            .backend
            .version_lookup()
            .ok_or_else(|| self.invalid_implementation(Capability::PackagesByName))?;

        let packages: Vec<_> = lookup
            .versions(name)
            .await?
            .into_iter()
            .map(|version| PackageInfo::new(name, version, self.clone()))
            .collect();

        tracing::debug!(count = packages.len(), "found package versions");

        Ok(packages)
    }

    /// A single version of `name`, or `None` if the backend doesn't list it
    ///
    /// `version` may be [`LATEST`], which picks the last version the backend
    /// reported.
    ///
    /// # Errors
    ///
    /// Same as [`packages_by_name`](Self::packages_by_name).
    pub async fn package_info(
        &self,
        name: &str,
        version: &str,
    ) -> Result<Option<PackageInfo>, PackageManagerError> {
        let packages = self.packages_by_name(name).await?;

        if version == LATEST {
            return Ok(packages.into_iter().last());
        }

        Ok(packages.into_iter().find(|p| p.version() == version))
    }

    /// Local install state of `name`
    ///
    /// A package that isn't installed is a normal result with no installed
    /// version.
    ///
    /// # Errors
    ///
    /// Fails on any gating failure or backend error.
    #[instrument(skip(self), fields(manager = %self.name()))]
    pub async fn package_status(&self, name: &str) -> Result<PackageStatus, PackageManagerError> {
        self.gate().await?;

        let lookup = self
            .backend
            .status_lookup()
            .ok_or_else(|| self.invalid_implementation(Capability::PackageStatus))?;

        let installed_version = lookup.installed_version(name).await?;
        tracing::debug!(?installed_version, "resolved package status");

        Ok(PackageStatus::new(name, installed_version, self.clone()))
    }

    /// Installs exactly `package.version()` of `package.name()`
    ///
    /// # Errors
    ///
    /// Fails on any gating failure, or with
    /// [`PackageManagerError::Command`] if the install command exits
    /// unsuccessfully.
    #[instrument(
        skip(self, package),
        fields(manager = %self.name(), package = %package.name(), version = %package.version())
    )]
    pub async fn install_package(
        &self,
        package: &PackageInfo,
    ) -> Result<InstallOutput, PackageManagerError> {
        self.gate().await?;

        let installer = self
            .backend
            .installer()
            .ok_or_else(|| self.invalid_implementation(Capability::InstallPackage))?;

        installer.install(package.name(), package.version()).await
    }

    /// Direct dependencies of `package`
    ///
    /// Only the required capabilities are validated up front. A backend
    /// without dependency lookup fails here with
    /// [`PackageManagerError::CapabilityNotFound`] after the presence check,
    /// not with [`PackageManagerError::InvalidImplementation`].
    ///
    /// # Errors
    ///
    /// Fails on any gating failure, a missing capability, or a backend error.
    #[instrument(
        skip(self, package),
        fields(manager = %self.name(), package = %package.name(), version = %package.version())
    )]
    pub async fn package_dependencies(
        &self,
        package: &PackageInfo,
    ) -> Result<Vec<PackageInfo>, PackageManagerError> {
        self.gate().await?;

        let lookup = self.backend.dependency_lookup().ok_or_else(|| {
            PackageManagerError::CapabilityNotFound {
                manager: self.name().to_string(),
                capability: Capability::PackageDependencies,
            }
        })?;

        Ok(lookup
            .dependencies(package.name(), package.version())
            .await?
            .into_iter()
            .map(|id| PackageInfo::new(id.name, id.version, self.clone()))
            .collect())
    }

    async fn gate(&self) -> Result<(), PackageManagerError> {
        self.valid_implementation()?;
        self.assert_present().await
    }

    fn invalid_implementation(&self, capability: Capability) -> PackageManagerError {
        PackageManagerError::InvalidImplementation {
            manager: self.name().to_string(),
            capability,
        }
    }
}

impl fmt::Debug for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageManager")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
