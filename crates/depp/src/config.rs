pub mod loader;
pub mod validate;

pub use self::loader::{ApplyToConfig, ConfigLoadError, ConfigLoader, YamlLoader};

use serde::Deserialize;

use crate::{adapters::pip, commands::shell};

const VERBOSE_DEFAULT: bool = false;
const USE_COLORS_DEFAULT: bool = true;

/// Application configuration that combines file config, environment and CLI args
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shell used to run backend commands
    pub(crate) shell: String,

    /// Command used to invoke pip
    pub(crate) pip_program: String,

    // UI settings
    pub(crate) verbose: bool,
    pub(crate) use_colors: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfigBuilder::default().build()
    }
}

impl AppConfig {
    #[must_use]
    pub fn shell(&self) -> &str {
        &self.shell
    }

    #[must_use]
    pub fn pip_program(&self) -> &str {
        &self.pip_program
    }

    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    #[must_use]
    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    pub fn shell_mut(&mut self) -> &mut String {
        &mut self.shell
    }

    pub fn pip_program_mut(&mut self) -> &mut String {
        &mut self.pip_program
    }

    pub fn verbose_mut(&mut self) -> &mut bool {
        &mut self.verbose
    }

    pub fn use_colors_mut(&mut self) -> &mut bool {
        &mut self.use_colors
    }
}

/// Builder pattern for `AppConfig`
///
#[derive(Default, Debug)]
pub struct AppConfigBuilder {
    shell: Option<String>,
    pip_program: Option<String>,
    verbose: Option<bool>,
    use_colors: Option<bool>,
}

impl AppConfigBuilder {
    #[must_use]
    pub fn shell(mut self, shell: &str) -> Self {
        self.shell = Some(shell.to_string());
        self
    }

    #[must_use]
    pub fn pip_program(mut self, pip_program: &str) -> Self {
        self.pip_program = Some(pip_program.to_string());
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    #[must_use]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = Some(use_colors);
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        AppConfig {
            shell: self.shell.unwrap_or_else(|| shell::DEFAULT_SHELL.to_string()),
            pip_program: self
                .pip_program
                .unwrap_or_else(|| pip::DEFAULT_PROGRAM.to_string()),
            verbose: self.verbose.unwrap_or(VERBOSE_DEFAULT),
            use_colors: self.use_colors.unwrap_or(USE_COLORS_DEFAULT),
        }
    }
}
