use std::{fs, path::PathBuf, sync::Arc};

use ::config::{Config, Environment, File, FileFormat};
use etcetera::{AppStrategy, AppStrategyArgs, choose_app_strategy};

use crate::config::AppConfig;

use super::{ConfigLoadError, ConfigLoader};

/// Overrides the directory searched for `config.yaml`
pub const CONFIG_DIR_ENV: &str = "DEPP_CONFIG_DIR";

/// Prefix for environment variables that override individual settings
pub const ENV_PREFIX: &str = "DEPP";

/// Loads `config.yaml` (or `config.yml`) from the config directory, then
/// applies `DEPP_*` environment variables on top. A missing file just means
/// defaults.
#[derive(Debug, Clone)]
pub struct YamlLoader {
    config_dir: PathBuf,
    read_environment: bool,
}

impl YamlLoader {
    /// Loader for an explicit directory; environment variables are ignored
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            read_environment: false,
        }
    }

    /// Loader for the platform config directory (or `DEPP_CONFIG_DIR`)
    ///
    /// # Errors
    ///
    /// Fails if no home directory can be found.
    pub fn from_environment() -> Result<Self, ConfigLoadError> {
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => choose_app_strategy(AppStrategyArgs {
                top_level_domain: "org".to_string(),
                author: "depp".to_string(),
                app_name: "depp".to_string(),
            })
            .map(|xdg| xdg.config_dir())
            .map_err(|e| ConfigLoadError::ConfigDirNotFound(e.to_string()))?,
        };

        Ok(Self {
            config_dir,
            read_environment: true,
        })
    }

    #[must_use]
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }
}

impl ConfigLoader for YamlLoader {
    fn load_config(&self) -> Result<AppConfig, ConfigLoadError> {
        let config_paths = self.find_config_file_paths();

        if config_paths.len() > 1 {
            return Err(ConfigLoadError::MultipleFound(
                config_paths
                    .into_iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>(),
            ));
        }

        let mut builder = Config::builder();

        if let Some(config_path) = config_paths.first() {
            tracing::debug!(path = %config_path.display(), "loading config file");

            let file_contents =
                fs::read_to_string(config_path).map_err(|e| ConfigLoadError::IoError {
                    path: config_path.clone(),
                    source: Arc::new(e),
                })?;

            builder = builder.add_source(File::from_str(&file_contents, FileFormat::Yaml));
        }

        if self.read_environment {
            builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    fn find_config_file_paths(&self) -> Vec<PathBuf> {
        ["config.yaml", "config.yml"]
            .into_iter()
            .map(|file_name| self.config_dir.join(file_name))
            .filter(|path| path.exists())
            .collect()
    }
}
