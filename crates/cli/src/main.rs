mod cli;
mod commands;
mod config;
mod reporter;
mod tables;

use std::process;

use clap::Parser;
use depp::config::{ApplyToConfig, ConfigLoader, YamlLoader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{cli::ClapCli, commands::dispatch_command, reporter::TerminalReporter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ClapCli::parse();

    // 1. Load config.yaml and DEPP_* variables, then apply CLI args on top
    let config = args.apply_to_config(YamlLoader::from_environment()?.load_config()?);

    init_tracing(config.verbose(), config.use_colors());
    debug!("CLI arguments: {:#?}", &args);
    debug!("Final config: {:#?}", &config);

    let reporter = TerminalReporter::new(config.use_colors());

    if let Err(error) = config.validate() {
        reporter.report_error(format!("Invalid configuration: {error}"));
        process::exit(1);
    }

    // 2. Dispatch and execute the requested command
    let exit_code = dispatch_command(&args.command, &config, reporter).await;

    process::exit(exit_code)
}

/// `RUST_LOG` wins; otherwise `--verbose` turns on debug output for depp
fn init_tracing(verbose: bool, use_colors: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "depp=debug,warn" } else { "warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_colors)
        .init();
}
