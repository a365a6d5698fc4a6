// file: src/command/mod.rs
// version: 1.0.0
// guid: 0cd8492a-edd6-4fa2-92c1-dd77138fff28

//! Composition of the single compiler invocation
//!
//! The command is kept as typed fields and only flattened into a shell string
//! at the very end, so callers can inspect each part separately.

pub mod banner;

pub use banner::Banner;

use crate::config::StaticConfig;
use crate::platform::PlatformProfile;

/// Flag that introduces the output file name
pub const OUTPUT_FLAG: &str = "-o";

/// A compiler invocation, field by field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub compiler: String,
    pub define_flag: String,
    pub output_name: String,
    pub include_flags: Vec<String>,
    pub source_glob: String,
    pub library_flags: String,
}

impl CommandLine {
    /// Combine static configuration with the active platform profile.
    /// Profile overrides win over the static defaults.
    pub fn compose(config: &StaticConfig, profile: &PlatformProfile) -> Self {
        Self {
            compiler: profile
                .compiler_override
                .clone()
                .unwrap_or_else(|| config.compiler_base.clone()),
            define_flag: profile.define_flag.clone(),
            output_name: profile
                .output_name_override
                .clone()
                .unwrap_or_else(|| config.output_name_default.clone()),
            include_flags: profile.include_flags.clone(),
            source_glob: config.source_glob.clone(),
            library_flags: profile.library_flags.clone(),
        }
    }

    /// First word of the compiler field, e.g. `g++`
    pub fn program(&self) -> Option<&str> {
        self.compiler.split_whitespace().next()
    }

    /// Flatten into the string handed to the command interpreter.
    ///
    /// Every positional field is kept even when empty, so an empty define or
    /// library field shows up as a doubled or trailing space. The output name
    /// and the include flags are separated by two spaces, matching the
    /// historical build script byte for byte.
    pub fn render(&self) -> String {
        let head = [
            self.compiler.as_str(),
            self.define_flag.as_str(),
            OUTPUT_FLAG,
            self.output_name.as_str(),
        ]
        .join(" ");
        let tail = [
            self.include_flags.join(" "),
            self.source_glob.clone(),
            self.library_flags.clone(),
        ]
        .join(" ");
        format!("{}  {}", head, tail)
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
