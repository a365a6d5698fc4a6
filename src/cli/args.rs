// file: src/cli/args.rs
// version: 1.0.0
// guid: b125f25a-6d5d-45da-86cb-e8153284db16

//! Command line argument definitions
//!
//! Every flag is optional; with no arguments the host platform is detected
//! and the compiler runs.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "platform-compile")]
#[command(about = "Compose and run the platform-specific C++ compile command")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long, help = "Print the command instead of running it")]
    pub dry_run: bool,

    #[arg(long, value_name = "NAME", help = "Use this platform name instead of the detected one (Linux, Darwin, Windows)")]
    pub platform: Option<String>,

    #[arg(short, long, value_name = "PATH", help = "TOML file overriding compiler, sources or output")]
    pub config: Option<PathBuf>,
}
