use depp::{package::PackageStatus, package_manager::PackageManager};
use serde::Serialize;

use crate::reporter::TerminalReporter;

#[derive(Debug, Serialize)]
struct StatusOutput<'a> {
    name: &'a str,
    manager: &'a str,
    installed: bool,
    version: Option<&'a str>,
}

impl<'a> From<&'a PackageStatus> for StatusOutput<'a> {
    fn from(status: &'a PackageStatus) -> Self {
        Self {
            name: status.name(),
            manager: status.package_manager().name(),
            installed: status.is_installed(),
            version: status.installed_version(),
        }
    }
}

pub(crate) async fn handle_status(
    manager: &PackageManager,
    package_name: &str,
    json: bool,
    reporter: TerminalReporter,
) -> anyhow::Result<i32> {
    let status = manager.package_status(package_name).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&StatusOutput::from(&status))?
        );
        return Ok(0);
    }

    let name = reporter.format_key(status.name());

    match status.installed_version() {
        Some(version) => reporter.report_success(format!("{name} {version} is installed")),
        None => reporter.report_info(format!("{name} is not installed")),
    }

    Ok(0)
}
