// Shell command runner adapter implementation

use std::{process::Stdio, sync::Arc, time::Instant};

use async_trait::async_trait;
use tokio::process::Command;

use super::runner::{CommandError, CommandOutput, CommandRunner, current_dir};

pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Shell command runner implementation
///
/// Runs each command as `<shell> -c <command>` with stdin closed, waiting for
/// the child to exit before returning.
#[derive(Clone, Debug)]
pub struct ShellCommandRunner {
    /// Path to the shell executable
    ///
    shell: String,
}

impl ShellCommandRunner {
    /// Create a new shell command runner
    ///
    #[must_use]
    pub fn new(shell: &str) -> Self {
        Self {
            shell: shell.to_string(),
        }
    }

    #[must_use]
    pub fn shell(&self) -> &str {
        &self.shell
    }
}

impl Default for ShellCommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

#[async_trait]
impl CommandRunner for ShellCommandRunner {
    async fn execute(&self, command: &str) -> Result<CommandOutput, CommandError> {
        let start_time = Instant::now();

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        tracing::trace!(shell = %self.shell, command, "spawning command");

        // `output()` pipes both streams and reaps the child before returning
        let output = cmd.output().await.map_err(|e| CommandError::IoError {
            command: command.to_string(),
            working_directory: current_dir(),
            source: Arc::new(e),
        })?;

        let output = CommandOutput::from_process(output, start_time.elapsed());

        tracing::debug!(
            command,
            exit_code = output.exit_code(),
            duration = ?output.duration(),
            "command finished",
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::runner::CommandRunnerExt;

    // These tests will actually run commands on the system
    #[tokio::test]
    async fn test_shell_command_runner_basic() {
        let runner = ShellCommandRunner::default();

        let output = runner.execute("echo hello").await.unwrap();
        assert!(output.stdout_str().contains("hello"));
        assert!(output.is_success());

        let output = runner.execute("exit 1").await.unwrap();
        assert!(!output.is_success());
        assert_eq!(output.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_captures_stderr_separately() {
        let runner = ShellCommandRunner::default();

        let output = runner.execute("echo out; echo err >&2").await.unwrap();

        assert_eq!(output.stdout_str(), "out\n");
        assert_eq!(output.stderr_str(), "err\n");
    }

    #[tokio::test]
    async fn test_missing_shell_is_io_error() {
        let runner = ShellCommandRunner::new("/nonexistent/shell-xyz");

        let result = runner.execute("echo hello").await;

        match result {
            Err(CommandError::IoError { command, .. }) => assert_eq!(command, "echo hello"),
            other => panic!("Expected CommandError::IoError, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_command_not_found_exits_non_zero() {
        let runner = ShellCommandRunner::default();

        let output = runner.execute("nonexistent_command_12345_xyz").await.unwrap();

        assert!(!output.is_success());
        assert_eq!(output.exit_code(), 127);
    }

    #[tokio::test]
    async fn test_command_with_large_output() {
        let runner = ShellCommandRunner::default();

        let output = runner
            .execute("for i in $(seq 1 1000); do echo \"Line $i\"; done")
            .await
            .unwrap();

        assert!(output.is_success());
        assert_eq!(output.stdout_str().lines().count(), 1000);
    }

    #[tokio::test]
    async fn test_strict_execution_success_returns_output() {
        let runner = ShellCommandRunner::default();

        let output = runner.execute_strict("printf ok").await.unwrap();

        assert_eq!(output.stdout_str(), "ok");
        assert!(output.stderr().is_empty());
    }

    #[tokio::test]
    async fn test_strict_execution_names_failed_command() {
        let runner = ShellCommandRunner::default();

        let error = runner
            .execute_strict("echo boom >&2; exit 42")
            .await
            .unwrap_err();

        match &error {
            CommandError::NonZeroExit {
                command,
                exit_code,
                stderr,
                ..
            } => {
                assert_eq!(command, "echo boom >&2; exit 42");
                assert_eq!(*exit_code, 42);
                assert_eq!(stderr, "boom\n");
            }
            other => panic!("Expected CommandError::NonZeroExit, got: {other:?}"),
        }
        assert!(error.to_string().contains("echo boom >&2; exit 42"));
    }
}
