// file: src/main.rs
// version: 1.0.0
// guid: 1b0e6a4c-5d2f-4e8a-9c71-3f6d2b8e0a95

//! platform-compile - main entry point

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing::error;

use platform_compile::{
    cli::Cli,
    config::ConfigLoader,
    error::exit_code_for,
    executor::{CommandExecutor, DryRunExecutor, ExecutionResult, ShellExecutor},
    logging::init_logger,
    platform::host_system_name,
    runner::BuildRunner,
    Result, StaticConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}: {}", "Warning".yellow().bold(), e);
    }

    let result = run(&cli).await;
    if let Err(e) = &result {
        error!("{}", e);
        eprintln!("{}: {}", "Error".red().bold(), e);
    }

    ExitCode::from(exit_code_for(&result))
}

async fn run(cli: &Cli) -> Result<ExecutionResult> {
    let config = ConfigLoader::new().load(cli.config.as_deref()).await?;
    let system_name = cli.platform.clone().unwrap_or_else(host_system_name);

    if cli.dry_run {
        run_with(config, DryRunExecutor, &system_name).await
    } else {
        run_with(config, ShellExecutor::new(), &system_name).await
    }
}

async fn run_with<E: CommandExecutor + Send>(
    config: StaticConfig,
    executor: E,
    system_name: &str,
) -> Result<ExecutionResult> {
    let mut runner = BuildRunner::new(config, executor);
    let mut stdout = std::io::stdout();
    runner.run(system_name, &mut stdout).await
}
