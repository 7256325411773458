//! Command execution abstractions and types
//!
//! This module provides the Command Runner port: run one external command,
//! wait for it to exit, and hand back everything it wrote. Package manager
//! adapters depend on this trait rather than on `tokio::process` directly so
//! their output parsing can be exercised without the real tool installed.

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    process::Output,
    sync::Arc,
    time::Duration,
};

use async_trait::async_trait;
use thiserror::Error;

/// Port for command execution (Hexagonal Architecture)
///
/// Implementations run a single command to completion. There is no streaming
/// and no timeout: a command that never exits never returns. Callers that need
/// a deadline should wrap the runner themselves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Execute a command and wait for completion
    ///
    /// A non-zero exit status is *not* an error here; inspect
    /// [`CommandOutput::is_success`] or use
    /// [`CommandRunnerExt::execute_strict`].
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::IoError`] if the command cannot be started or
    /// waited on.
    async fn execute(&self, command: &str) -> Result<CommandOutput, CommandError>;
}

/// Strict execution on top of any [`CommandRunner`].
#[async_trait]
pub trait CommandRunnerExt: CommandRunner {
    /// Execute a command, failing unless it exits with status 0
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NonZeroExit`] naming the exact command string
    /// when the command exits unsuccessfully, or whatever
    /// [`CommandRunner::execute`] returned if it could not run at all.
    async fn execute_strict(&self, command: &str) -> Result<CommandOutput, CommandError> {
        let output = self.execute(command).await?;

        if output.is_success() {
            return Ok(output);
        }

        Err(CommandError::NonZeroExit {
            command: command.to_string(),
            exit_code: output.exit_code(),
            stdout: output.stdout_str().into_owned(),
            stderr: output.stderr_str().into_owned(),
            working_directory: current_dir(),
            execution_duration: output.duration(),
        })
    }
}

impl<T: CommandRunner + ?Sized> CommandRunnerExt for T {}

/// Result of executing a command
///
/// Contains the exit status, both captured output streams and how long the
/// command took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal
    exit_code: Option<i32>,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    duration: Duration,
}

impl CommandOutput {
    /// Build an output record by hand
    ///
    /// Mostly useful for runners that don't spawn real processes.
    #[must_use]
    pub fn new(exit_code: i32, stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: stdout.into(),
            stderr: stderr.into(),
            duration: Duration::ZERO,
        }
    }

    pub(crate) fn from_process(output: Output, duration: Duration) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
            duration,
        }
    }

    /// Get the command's exit code
    ///
    /// Returns -1 if the exit code cannot be determined (e.g., the process
    /// was terminated by a signal).
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.exit_code.unwrap_or(-1)
    }

    #[must_use]
    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    /// Get stdout as a UTF-8 string, replacing invalid sequences
    #[must_use]
    pub fn stdout_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    #[must_use]
    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    /// Get stderr as a UTF-8 string, replacing invalid sequences
    #[must_use]
    pub fn stderr_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }

    /// How long the command took to execute
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// `true` if the command exited with status code 0
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Errors that can occur during command execution
///
/// Every variant carries the literal command string so failures can be traced
/// back to exactly what was run.
#[derive(Error, Debug, Clone)]
pub enum CommandError {
    /// IO error occurred while starting or waiting for the command
    #[error("IO Error executing command '{command}': {source}")]
    IoError {
        command: String,
        working_directory: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// Command executed but returned a non-zero exit code
    #[error("Command failed with exit code {exit_code}: {command}")]
    NonZeroExit {
        command: String,
        exit_code: i32,
        stdout: String,
        stderr: String,
        working_directory: PathBuf,
        execution_duration: Duration,
    },
}

impl CommandError {
    /// The command that failed
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::IoError { command, .. } | Self::NonZeroExit { command, .. } => command,
        }
    }
}

pub(crate) fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf())
}
