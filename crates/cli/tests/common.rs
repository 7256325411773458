#![allow(dead_code)]

use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

const FAKE_PIP: &str = r#"#!/bin/sh
echo "$@" >> "$(dirname "$0")/calls.log"
case "$1" in
  --version)
    echo "pip 24.0 from /opt/fake/pip (python 3.12)"
    ;;
  show)
    if [ "$2" = "requests" ]; then
      printf 'Name: requests\nVersion: 2.31.0\n'
    else
      echo "WARNING: Package(s) not found: $2" >&2
      exit 1
    fi
    ;;
  install)
    case "$2" in
      requests==)
        echo "ERROR: Could not find a version that satisfies the requirement requests== (from versions: 2.30.0, 2.31.0, 2.32.3)" >&2
        exit 1
        ;;
      *==)
        echo "ERROR: Could not find a version that satisfies the requirement $2 (from versions: none)" >&2
        exit 1
        ;;
      requests==2.32.3)
        echo "Successfully installed requests-2.32.3"
        ;;
      *)
        echo "ERROR: No matching distribution found for $2" >&2
        exit 1
        ;;
    esac
    ;;
esac
"#;

/// A scratch config directory plus a stand-in pip script that logs its calls
pub struct TestEnv {
    dir: TempDir,
    pip: String,
}

impl TestEnv {
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("pip");
        fs::write(&script, FAKE_PIP).unwrap();

        Self {
            pip: format!("/bin/sh {}", script.display()),
            dir,
        }
    }

    /// `pip_program` setting that runs the fake script
    #[must_use]
    pub fn pip(&self) -> &str {
        &self.pip
    }

    pub fn write_config(&self, yaml: &str) {
        fs::write(self.dir.path().join("config.yaml"), yaml).unwrap();
    }

    /// `depp` with the scratch config dir and no color
    #[must_use]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("depp").unwrap();
        cmd.env("DEPP_CONFIG_DIR", self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--no-color");
        cmd
    }

    /// Same as [`command`](Self::command), pointed at the fake pip
    #[must_use]
    pub fn pip_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["--pip", self.pip.as_str()]);
        cmd
    }

    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }
}
