// file: src/runner.rs
// version: 1.0.0
// guid: c3ab197d-46dc-446e-832e-7d9704372dac

//! Resolve, compose, announce, execute

use std::io::Write;
use tracing::{debug, info};

use crate::command::{Banner, CommandLine};
use crate::config::StaticConfig;
use crate::error::Result;
use crate::executor::{CommandExecutor, ExecutionResult};
use crate::logging::with_operation_span;
use crate::platform::PlatformProfile;

/// Drives a single compile run
pub struct BuildRunner<E: CommandExecutor> {
    config: StaticConfig,
    executor: E,
}

impl<E: CommandExecutor + Send> BuildRunner<E> {
    pub fn new(config: StaticConfig, executor: E) -> Self {
        Self { config, executor }
    }

    /// Compose the command for `system_name` without running it
    pub fn compose(&self, system_name: &str) -> CommandLine {
        with_operation_span("compose", || {
            let profile = PlatformProfile::resolve(system_name);
            debug!("Resolved {} to profile {:?}", system_name, profile);
            CommandLine::compose(&self.config, &profile)
        })
    }

    /// Print the banner to `out`, then run the command and wait for it
    pub async fn run<W: Write + Send>(&mut self, system_name: &str, out: &mut W) -> Result<ExecutionResult> {
        let command = self.compose(system_name);
        Banner::new(system_name, &command).write_to(out)?;

        info!("Compiling for platform: {}", system_name);
        self.executor.execute(&command).await
    }

    /// Access the executor, mainly for inspecting fakes in tests
    pub fn executor(&self) -> &E {
        &self.executor
    }
}
