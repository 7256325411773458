// src/adapters/pip.rs
// pip package manager adapter implementation

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::{
    commands::{
        ShellCommandRunner,
        runner::{CommandRunner, CommandRunnerExt},
    },
    config::AppConfig,
    package_manager::{
        Backend, InstallOutput, Installer, PackageManagerError, PresenceCheck, StatusLookup,
        VersionLookup,
    },
};

pub const DEFAULT_PROGRAM: &str = "pip";

/// First word of `pip --version` output
const NAME_TOKEN: &str = "pip";

// Asking pip for the empty version makes it fail and list what it does know:
// `ERROR: Could not find a version that satisfies the requirement six== (from versions: 1.0, 1.1)`
static AVAILABLE_VERSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)Could not find a version that satisfies the requirement .*==\s*\(from versions: (.*)\)",
    )
    .unwrap()
});

static SHOW_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Version: (\S.*?)\r?$").unwrap());

// PEP 508 distribution names
static PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9._-]*[A-Za-z0-9])?$").unwrap());

static PACKAGE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9.+!_-]*$").unwrap());

/// pip backend
///
/// Drives the pip CLI through a [`CommandRunner`] and scrapes its text
/// output. Dependency lookup isn't supported.
#[derive(Debug, Clone)]
pub struct Pip<CR> {
    /// Command used to invoke pip, e.g. `pip3` or `python3 -m pip`
    ///
    program: String,

    command_runner: CR,
}

impl<CR: CommandRunner> Pip<CR> {
    pub fn new(command_runner: CR) -> Self {
        Self::with_program(DEFAULT_PROGRAM, command_runner)
    }

    pub fn with_program(program: &str, command_runner: CR) -> Self {
        Self {
            program: program.to_string(),
            command_runner,
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn unexpected_output(&self, command: String) -> PackageManagerError {
        PackageManagerError::UnexpectedOutput {
            manager: NAME_TOKEN.to_string(),
            command,
        }
    }
}

impl Pip<ShellCommandRunner> {
    /// pip run through the configured shell
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_program(config.pip_program(), ShellCommandRunner::new(config.shell()))
    }
}

#[async_trait]
impl<CR: CommandRunner> PresenceCheck for Pip<CR> {
    async fn present(&self) -> Result<bool, PackageManagerError> {
        let command = format!("{} --version", self.program);
        let output = self.command_runner.execute(&command).await?;

        let present = output.is_success()
            && output.stderr().is_empty()
            && output.stdout_str().starts_with(NAME_TOKEN);

        tracing::debug!(command = %command, present, "checked for pip");

        Ok(present)
    }
}

#[async_trait]
impl<CR: CommandRunner> VersionLookup for Pip<CR> {
    async fn versions(&self, name: &str) -> Result<Vec<String>, PackageManagerError> {
        validate_name(name)?;

        // This command is expected to fail; only its stderr matters
        let command = format!("{} install {name}==", self.program);
        let output = self.command_runner.execute(&command).await?;

        parse_available_versions(&output.stderr_str())
            .ok_or_else(|| self.unexpected_output(command))
    }
}

#[async_trait]
impl<CR: CommandRunner> StatusLookup for Pip<CR> {
    async fn installed_version(&self, name: &str) -> Result<Option<String>, PackageManagerError> {
        validate_name(name)?;

        let command = format!("{} show {name}", self.program);
        let output = self.command_runner.execute(&command).await?;

        if !output.is_success() {
            tracing::debug!(exit_code = output.exit_code(), "package not installed");
            return Ok(None);
        }

        parse_show_version(&output.stdout_str())
            .map(Some)
            .ok_or_else(|| self.unexpected_output(command))
    }
}

#[async_trait]
impl<CR: CommandRunner> Installer for Pip<CR> {
    async fn install(
        &self,
        name: &str,
        version: &str,
    ) -> Result<InstallOutput, PackageManagerError> {
        validate_name(name)?;
        validate_version(name, version)?;

        let command = format!("{} install {name}=={version}", self.program);
        let output = self.command_runner.execute_strict(&command).await?;

        Ok(InstallOutput {
            stdout: output.stdout_str().into_owned(),
            stderr: output.stderr_str().into_owned(),
        })
    }
}

impl<CR: CommandRunner> Backend for Pip<CR> {
    fn name(&self) -> &str {
        NAME_TOKEN
    }

    fn presence_check(&self) -> Option<&dyn PresenceCheck> {
        Some(self)
    }

    fn version_lookup(&self) -> Option<&dyn VersionLookup> {
        Some(self)
    }

    fn status_lookup(&self) -> Option<&dyn StatusLookup> {
        Some(self)
    }

    fn installer(&self) -> Option<&dyn Installer> {
        Some(self)
    }
}

/// Pulls the version list out of pip's "Could not find a version" error
///
/// Returns `None` if the error line isn't there. pip prints `none` for a
/// package with no releases, which yields an empty list.
fn parse_available_versions(stderr: &str) -> Option<Vec<String>> {
    let captures = AVAILABLE_VERSIONS.captures(stderr)?;
    let list = captures.get(1)?.as_str().trim();

    if list.eq_ignore_ascii_case("none") {
        return Some(Vec::new());
    }

    Some(
        list.split(',')
            .map(str::trim)
            .filter(|version| !version.is_empty())
            .map(String::from)
            .collect(),
    )
}

fn parse_show_version(stdout: &str) -> Option<String> {
    let captures = SHOW_VERSION.captures(stdout)?;

    Some(captures.get(1)?.as_str().to_string())
}

fn validate_name(name: &str) -> Result<(), PackageManagerError> {
    if PACKAGE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(PackageManagerError::InvalidPackageName {
            name: name.to_string(),
        })
    }
}

fn validate_version(name: &str, version: &str) -> Result<(), PackageManagerError> {
    if PACKAGE_VERSION.is_match(version) {
        Ok(())
    } else {
        Err(PackageManagerError::InvalidVersion {
            name: name.to_string(),
            version: version.to_string(),
        })
    }
}
