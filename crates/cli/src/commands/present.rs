use depp::package_manager::PackageManager;

use crate::reporter::TerminalReporter;

pub(crate) async fn handle_present(
    manager: &PackageManager,
    reporter: TerminalReporter,
) -> anyhow::Result<i32> {
    manager.valid_implementation()?;

    if manager.present().await? {
        reporter.report_success(format!("{} is available", manager.name()));
        Ok(0)
    } else {
        reporter.report_error(format!("{} is not available", manager.name()));
        Ok(1)
    }
}
