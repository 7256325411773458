use thiserror::Error;

use crate::commands::runner::CommandError;

use super::port::Capability;

/// Errors returned by package manager operations
///
/// One type for every failure the contract can report. The variant says which
/// kind of failure it was:
///
/// - structural: [`InvalidImplementation`](Self::InvalidImplementation),
///   [`CapabilityNotFound`](Self::CapabilityNotFound)
/// - environmental: [`Unavailable`](Self::Unavailable),
///   [`Command`](Self::Command)
/// - parsing: [`UnexpectedOutput`](Self::UnexpectedOutput)
/// - input: [`InvalidPackageName`](Self::InvalidPackageName),
///   [`InvalidVersion`](Self::InvalidVersion)
#[derive(Error, Debug, Clone)]
pub enum PackageManagerError {
    /// A required capability is missing from the backend
    #[error("incorrect implementation of `{manager}` ({capability} not implemented)")]
    InvalidImplementation {
        manager: String,
        capability: Capability,
    },

    /// An optional capability was used but the backend doesn't provide it
    #[error("package manager `{manager}` does not support {capability}")]
    CapabilityNotFound {
        manager: String,
        capability: Capability,
    },

    /// The backend's presence check reported it isn't usable
    #[error("package manager `{manager}` is not available")]
    Unavailable { manager: String },

    /// A backend command couldn't run, or failed when it had to succeed
    #[error(transparent)]
    Command(#[from] CommandError),

    /// A backend command's output didn't have the expected shape
    #[error("invalid {manager} response for '{command}'")]
    UnexpectedOutput { manager: String, command: String },

    #[error("invalid package name `{name}`")]
    InvalidPackageName { name: String },

    #[error("invalid version `{version}` for package `{name}`")]
    InvalidVersion { name: String, version: String },
}
