use depp::{package::PackageInfo, package_manager::PackageManager};
use serde::Serialize;
use tracing::info;

use crate::{reporter::TerminalReporter, tables::TableReporter};

#[derive(Debug, Serialize)]
struct VersionsOutput<'a> {
    name: &'a str,
    manager: &'a str,
    versions: Vec<&'a str>,
}

impl<'a> VersionsOutput<'a> {
    fn new(name: &'a str, manager: &'a str, packages: &'a [PackageInfo]) -> Self {
        Self {
            name,
            manager,
            versions: packages.iter().map(PackageInfo::version).collect(),
        }
    }
}

pub(crate) async fn handle_versions(
    manager: &PackageManager,
    package_name: &str,
    json: bool,
    reporter: TerminalReporter,
) -> anyhow::Result<i32> {
    info!("Listing versions of {package_name}");

    let packages = manager.packages_by_name(package_name).await?;

    if json {
        let output = VersionsOutput::new(package_name, manager.name(), &packages);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(0);
    }

    let Some(latest) = packages.last() else {
        reporter.report_warning(format!(
            "No versions of {} found",
            reporter.format_key(package_name)
        ));
        return Ok(0);
    };

    let mut table = TableReporter::new();
    table.setup(vec!["Package", "Version", ""]);

    for package in &packages {
        let marker = if package.version() == latest.version() {
            "latest"
        } else {
            ""
        };

        table.add_row(vec![package.name(), package.version(), marker]);
    }

    table.print();

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_output_shape() {
        let output = VersionsOutput {
            name: "six",
            manager: "pip",
            versions: vec!["1.15.0", "1.16.0"],
        };

        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "six",
                "manager": "pip",
                "versions": ["1.15.0", "1.16.0"],
            })
        );
    }

    #[test]
    fn test_versions_output_empty() {
        let output = VersionsOutput::new("six", "pip", &[]);

        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["versions"], serde_json::json!([]));
    }
}
