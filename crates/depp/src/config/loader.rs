pub mod yaml;

pub use self::yaml::YamlLoader;

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::config::AppConfig;

/// Port for loading configuration from disk
///
pub trait ConfigLoader: Send + Sync {
    /// Load configuration from standard locations
    ///
    fn load_config(&self) -> Result<AppConfig, ConfigLoadError>;

    /// Configuration files that exist in the searched locations
    ///
    fn find_config_file_paths(&self) -> Vec<PathBuf>;
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Could not determine the configuration directory: {0}")]
    ConfigDirNotFound(String),

    #[error("Multiple configuration files found: {}", .0.join(", "))]
    MultipleFound(Vec<String>),

    #[error("I/O error reading config file `{}`: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    #[error(transparent)]
    ConfigError(#[from] ::config::ConfigError),
}

/// This trait allows for applying runtime CLI arguments on top of the configuration that the app
/// read from the config file.
///
pub trait ApplyToConfig {
    /// Implement this method such that the arguments in `args` are applied after/on top of the
    /// configuration that was loaded from the config file.
    ///
    fn apply_to_config(&self, config: AppConfig) -> AppConfig;
}
