// file: src/executor.rs
// version: 1.0.0
// guid: 4b226ab9-15ab-44a3-b22f-bc07eccf19e2

//! Hands the composed command to the system command interpreter

use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info};

use crate::command::CommandLine;
use crate::error::{BuildError, Result};

/// Termination status of the child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code, or `None` when the child was terminated by a signal
    pub raw_status: Option<i32>,
}

impl ExecutionResult {
    pub fn from_raw(raw_status: Option<i32>) -> Self {
        Self { raw_status }
    }

    pub fn success(&self) -> bool {
        self.raw_status == Some(0)
    }
}

impl From<ExitStatus> for ExecutionResult {
    fn from(status: ExitStatus) -> Self {
        Self::from_raw(status.code())
    }
}

/// Trait for running a composed command
#[async_trait::async_trait]
pub trait CommandExecutor {
    /// Run the command to completion and report how it terminated
    async fn execute(&mut self, command: &CommandLine) -> Result<ExecutionResult>;
}

/// Runs commands through `sh -c` (or `cmd /C` on Windows) with inherited stdio
#[derive(Debug, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }

    #[cfg(not(windows))]
    fn shell_command(line: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(line);
        cmd
    }

    #[cfg(windows)]
    fn shell_command(line: &str) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").raw_arg(line);
        cmd
    }

    /// Log whether the compiler resolves on PATH. Informational only: the
    /// shell still gets the command either way.
    fn probe_compiler(command: &CommandLine) {
        match command.program() {
            Some(program) => match which::which(program) {
                Ok(path) => debug!("Compiler {} resolved to {}", program, path.display()),
                Err(_) => debug!("Compiler not found on PATH: {}", program),
            },
            None => debug!("Composed command has an empty compiler field"),
        }
    }
}

#[async_trait::async_trait]
impl CommandExecutor for ShellExecutor {
    async fn execute(&mut self, command: &CommandLine) -> Result<ExecutionResult> {
        Self::probe_compiler(command);

        let line = command.render();
        info!("Executing: {}", line);

        let status = Self::shell_command(&line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| BuildError::execution(format!("Failed to run command interpreter: {}", e)))?;

        let result = ExecutionResult::from(status);
        if result.success() {
            info!("Command executed successfully");
        } else {
            info!("Command failed with status: {:?}", result.raw_status);
        }
        Ok(result)
    }
}

/// Prints what would run and reports success without spawning anything
#[derive(Debug, Default)]
pub struct DryRunExecutor;

#[async_trait::async_trait]
impl CommandExecutor for DryRunExecutor {
    async fn execute(&mut self, command: &CommandLine) -> Result<ExecutionResult> {
        println!("DRY RUN: would execute: {}", command);
        Ok(ExecutionResult::from_raw(Some(0)))
    }
}
