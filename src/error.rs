// file: src/error.rs
// version: 1.0.0
// guid: 1141164b-2c77-451a-8e2b-2d18982d94f4

use thiserror::Error;

use crate::executor::ExecutionResult;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, BuildError>;

/// Error types for the compile runner
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command execution error: {0}")]
    Execution(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl BuildError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Create a new logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

/// Translate the outcome of a run into the process exit code.
///
/// Only a child that exited with status zero yields `0`. Non-zero exits,
/// signal terminations and any error on our side all collapse to `1`.
pub fn exit_code_for(result: &Result<ExecutionResult>) -> u8 {
    match result {
        Ok(execution) if execution.success() => 0,
        _ => 1,
    }
}
