// file: src/lib.rs
// version: 1.0.0
// guid: 7e2c9a10-8b4d-4f63-a5e1-0c9d3b7f2a68

//! # platform-compile
//!
//! Composes the C++ compile command for the host platform, prints it, runs
//! it through the system shell and reports success as exit code `0` or `1`.
//!
//! The pieces are kept separate so each can be checked on its own:
//! [`platform::PlatformProfile`] picks flags, [`command::CommandLine`] holds
//! the typed fields, and [`executor::CommandExecutor`] runs them.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod platform;
pub mod runner;

pub use command::CommandLine;
pub use config::StaticConfig;
pub use error::{BuildError, Result};
pub use platform::{PlatformKey, PlatformProfile};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
