//! Contract behaviour through the public API, with a scripted command runner
//! standing in for the shell.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use depp::{
    adapters::Pip,
    commands::{CommandError, CommandOutput, CommandRunner},
    package_manager::{Capability, PackageManager, PackageManagerError},
};

/// Replies to known commands with canned output and records every command.
/// Unknown commands exit 127, like a shell would.
#[derive(Clone, Default)]
struct ScriptedRunner {
    replies: Arc<HashMap<String, CommandOutput>>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl ScriptedRunner {
    fn new(replies: &[(&str, CommandOutput)]) -> Self {
        Self {
            replies: Arc::new(
                replies
                    .iter()
                    .map(|(command, output)| (command.to_string(), output.clone()))
                    .collect(),
            ),
            executed: Arc::default(),
        }
    }

    fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn execute(&self, command: &str) -> Result<CommandOutput, CommandError> {
        self.executed.lock().unwrap().push(command.to_string());

        Ok(self
            .replies
            .get(command)
            .cloned()
            .unwrap_or_else(|| CommandOutput::new(127, "", "command not found")))
    }
}

fn pip_version() -> (&'static str, CommandOutput) {
    (
        "pip --version",
        CommandOutput::new(0, "pip 23.3.1 from /usr/lib/python3/site-packages/pip\n", ""),
    )
}

#[tokio::test]
async fn test_unavailable_pip_runs_nothing_else() {
    let runner = ScriptedRunner::new(&[(
        "pip --version",
        CommandOutput::new(127, "", "sh: pip: not found\n"),
    )]);
    let manager = PackageManager::new(Pip::new(runner.clone()));

    let by_name = manager.packages_by_name("six").await;
    let status = manager.package_status("six").await;

    assert!(matches!(by_name, Err(PackageManagerError::Unavailable { .. })));
    assert!(matches!(status, Err(PackageManagerError::Unavailable { .. })));
    assert_eq!(runner.executed(), vec!["pip --version", "pip --version"]);
}

#[tokio::test]
async fn test_lookup_status_and_install_flow() {
    let runner = ScriptedRunner::new(&[
        pip_version(),
        (
            "pip install six==",
            CommandOutput::new(
                1,
                "",
                "ERROR: Could not find a version that satisfies the requirement six== (from versions: 1.15.0, 1.16.0)\n",
            ),
        ),
        (
            "pip show six",
            CommandOutput::new(1, "", "WARNING: Package(s) not found: six\n"),
        ),
        (
            "pip install six==1.16.0",
            CommandOutput::new(0, "Successfully installed six-1.16.0\n", ""),
        ),
    ]);
    let manager = PackageManager::new(Pip::new(runner.clone()));

    let status = manager.package_status("six").await.unwrap();
    assert!(!status.is_installed());

    let latest = manager.package_info("six", "latest").await.unwrap().unwrap();
    assert_eq!(latest.version(), "1.16.0");

    let output = manager.install_package(&latest).await.unwrap();
    assert_eq!(output.stdout, "Successfully installed six-1.16.0\n");

    assert_eq!(
        runner.executed(),
        vec![
            "pip --version",
            "pip show six",
            "pip --version",
            "pip install six==",
            "pip --version",
            "pip install six==1.16.0",
        ]
    );
}

#[tokio::test]
async fn test_localized_output_is_a_parse_failure() {
    let runner = ScriptedRunner::new(&[
        pip_version(),
        (
            "pip install six==",
            CommandOutput::new(
                1,
                "",
                "FEHLER: Keine passende Version gefunden für six== (Versionen: 1.16.0)\n",
            ),
        ),
    ]);
    let manager = PackageManager::new(Pip::new(runner));

    let error = manager.packages_by_name("six").await.unwrap_err();

    assert_eq!(error.to_string(), "invalid pip response for 'pip install six=='");
}

#[tokio::test]
async fn test_every_required_capability_is_validated() {
    let manager = PackageManager::new(Pip::new(ScriptedRunner::default()));

    assert!(manager.valid_implementation().unwrap());
    assert!(Capability::REQUIRED.iter().all(|c| c.is_required()));
}
