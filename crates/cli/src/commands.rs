mod deps;
mod install;
mod present;
mod status;
mod versions;

use depp::{adapters::Pip, config::AppConfig, package_manager::PackageManager};
use tracing::debug;

use crate::{cli::ClapCommands, reporter::TerminalReporter};

/// Routes a command to its handler and turns the outcome into an exit code
///
/// Errors are printed to stderr and mapped to exit code 1.
pub(crate) async fn dispatch_command(
    command: &ClapCommands,
    config: &AppConfig,
    reporter: TerminalReporter,
) -> i32 {
    debug!("Dispatching command: {:?}", command);

    let manager = PackageManager::new(Pip::from_config(config));

    let result = match command {
        ClapCommands::Present => present::handle_present(&manager, reporter).await,
        ClapCommands::Versions { package_name, json } => {
            versions::handle_versions(&manager, package_name, *json, reporter).await
        }
        ClapCommands::Status { package_name, json } => {
            status::handle_status(&manager, package_name, *json, reporter).await
        }
        ClapCommands::Install {
            package_name,
            version,
            yes,
        } => {
            install::handle_install(&manager, package_name, version, *yes, config, reporter).await
        }
        ClapCommands::Deps {
            package_name,
            version,
        } => deps::handle_deps(&manager, package_name, version, reporter).await,
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(error) => {
            reporter.report_error(format!("{error:#}"));
            1
        }
    }
}
