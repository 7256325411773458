//! depp - one contract for many package managers
//!
//! The `depp` library defines a uniform way to query, install and inspect
//! packages regardless of which package manager backs them. Each backend is an
//! adapter behind the [`package_manager::Backend`] port; the crate ships a pip
//! adapter as the reference implementation.
//!
//! # Main Components
//!
//! - [`package_manager`] - The capability contract and its gating rules
//! - [`package`] - Entities returned by contract operations
//! - [`adapters`] - Backend implementations (pip)
//! - [`commands`] - Command execution abstractions
//! - [`config`] - Application configuration management
//!
//! # Examples
//!
//! ```no_run
//! use depp::{adapters::Pip, commands::ShellCommandRunner, package_manager::PackageManager};
//!
//! # async fn run() -> Result<(), depp::package_manager::PackageManagerError> {
//! let pip = PackageManager::new(Pip::new(ShellCommandRunner::default()));
//!
//! for package in pip.packages_by_name("requests").await? {
//!     println!("{package}");
//! }
//!
//! let status = pip.package_status("requests").await?;
//! println!("installed: {:?}", status.installed_version());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod commands;
pub mod config;
pub mod package;
pub mod package_manager;
