use depp::config::{AppConfig, ApplyToConfig};

use crate::cli::ClapCli;

impl ApplyToConfig for ClapCli {
    fn apply_to_config(&self, mut config: AppConfig) -> AppConfig {
        if let Some(pip) = self.pip.as_ref() {
            *config.pip_program_mut() = pip.clone();
        }

        if let Some(shell) = self.shell.as_ref() {
            *config.shell_mut() = shell.clone();
        }

        // Flags can only switch these on/off relative to the file
        if self.verbose {
            *config.verbose_mut() = true;
        }

        if self.no_color {
            *config.use_colors_mut() = false;
        }

        config
    }
}
