use thiserror::Error;

use super::AppConfig;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("Empty field: {0}")]
    EmptyField(&'static str),

    #[error("Shell must be an absolute path: {0}")]
    RelativeShell(String),
}

impl AppConfig {
    /// Checks the settings that would otherwise only fail once a command runs
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.shell.trim().is_empty() {
            return Err(ConfigValidationError::EmptyField("shell"));
        }

        if !self.shell.starts_with('/') {
            return Err(ConfigValidationError::RelativeShell(self.shell.clone()));
        }

        if self.pip_program.trim().is_empty() {
            return Err(ConfigValidationError::EmptyField("pip_program"));
        }

        Ok(())
    }
}
