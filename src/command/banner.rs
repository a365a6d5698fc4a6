// file: src/command/banner.rs
// version: 1.0.0
// guid: fc673f2a-6014-4fba-aa22-11f4647d87de

//! Diagnostic block printed before the compiler runs

use std::io::Write;

use super::CommandLine;
use crate::error::Result;

pub const HEADER: &str = "============v (Command running on terminal) v===========================";
pub const FOOTER: &str = "========================================================================";

/// Kept byte-for-byte, misspelling included, so wrapper scripts keep matching.
pub const PLATFORM_PREFIX: &str = "Compilng on: ";

/// The four-line block shown ahead of execution
pub struct Banner<'a> {
    pub system_name: &'a str,
    pub command: &'a CommandLine,
}

impl<'a> Banner<'a> {
    pub fn new(system_name: &'a str, command: &'a CommandLine) -> Self {
        Self {
            system_name,
            command,
        }
    }

    /// Write the block and flush, so it lands before any child output
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", HEADER)?;
        writeln!(out, "{}{}", PLATFORM_PREFIX, self.system_name)?;
        writeln!(out, "{}", self.command)?;
        writeln!(out, "{}", FOOTER)?;
        out.flush()?;
        Ok(())
    }
}
