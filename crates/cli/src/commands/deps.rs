use anyhow::Context;
use depp::package_manager::PackageManager;

use crate::{reporter::TerminalReporter, tables::TableReporter};

pub(crate) async fn handle_deps(
    manager: &PackageManager,
    package_name: &str,
    version: &str,
    reporter: TerminalReporter,
) -> anyhow::Result<i32> {
    let mut package = manager
        .package_info(package_name, version)
        .await?
        .with_context(|| format!("no version '{version}' of '{package_name}' found"))?;

    let label = reporter.format_key(&package);
    let dependencies = package.resolve_dependencies().await?;

    if dependencies.is_empty() {
        reporter.report_info(format!("{label} has no dependencies"));
        return Ok(0);
    }

    let mut table = TableReporter::new();
    table.setup(vec!["Dependency", "Version"]);

    for dependency in dependencies {
        table.add_row(vec![dependency.name(), dependency.version()]);
    }

    table.print();

    Ok(0)
}
