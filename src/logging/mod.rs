// file: src/logging/mod.rs
// version: 1.0.0
// guid: 53a73ac7-7ed7-43cf-891e-59fb95e89f07

//! Logging system for the compile runner

pub mod logger;

pub use logger::{init_logger, with_operation_span};
