// file: src/cli/mod.rs
// version: 1.0.0
// guid: de2b7a4d-f7f4-4df2-8ae0-cdb2bd9902e0

//! Command line interface for the compile runner

pub mod args;

pub use args::Cli;
