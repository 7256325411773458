use anyhow::Context;
use depp::{config::AppConfig, package_manager::PackageManager};
use dialoguer::Confirm;
use tracing::info;

use crate::reporter::TerminalReporter;

pub(crate) async fn handle_install(
    manager: &PackageManager,
    package_name: &str,
    version: &str,
    yes: bool,
    config: &AppConfig,
    reporter: TerminalReporter,
) -> anyhow::Result<i32> {
    info!("Installing package: {package_name} ({version})");

    let package = manager
        .package_info(package_name, version)
        .await?
        .with_context(|| format!("no version '{version}' of '{package_name}' found"))?;

    let label = reporter.format_key(&package);

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Install {label} with {}?", manager.name()))
            .default(false)
            .interact()
            .context("could not read confirmation (pass --yes to skip it)")?;

        if !confirmed {
            reporter.report_info("Installation cancelled");
            return Ok(0);
        }
    }

    let output = manager.install_package(&package).await?;

    if config.verbose() {
        print!("{}", output.stdout);
        eprint!("{}", output.stderr);
    }

    reporter.report_success(format!("Installed {label}"));

    Ok(0)
}
