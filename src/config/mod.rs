// file: src/config/mod.rs
// version: 1.0.0
// guid: 63bdc7b0-b51f-4149-b189-e8cd1a26d7ec

//! Static compile configuration shared by every platform
//!
//! Values come from built-in defaults, optionally overridden by a project
//! TOML file, an explicit `--config` file and environment variables.

pub mod loader;

pub use loader::ConfigLoader;

use serde::Deserialize;

pub const DEFAULT_COMPILER: &str = "g++ -g -std=c++17";
pub const DEFAULT_SOURCES: &str = "./src/*.cpp";
pub const DEFAULT_OUTPUT: &str = "prog";

/// Project config file picked up from the working directory
pub const PROJECT_CONFIG_FILE: &str = ".platform-compile.toml";

pub const ENV_COMPILER: &str = "PLATFORM_COMPILE_COMPILER";
pub const ENV_SOURCES: &str = "PLATFORM_COMPILE_SOURCES";
pub const ENV_OUTPUT: &str = "PLATFORM_COMPILE_OUTPUT";

/// Compiler, sources and output name used when a platform has no override
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticConfig {
    pub compiler_base: String,
    pub source_glob: String,
    pub output_name_default: String,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            compiler_base: DEFAULT_COMPILER.to_string(),
            source_glob: DEFAULT_SOURCES.to_string(),
            output_name_default: DEFAULT_OUTPUT.to_string(),
        }
    }
}

/// One configuration layer; unset keys leave the lower layer untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub compiler: Option<String>,
    pub sources: Option<String>,
    pub output: Option<String>,
}

impl StaticConfig {
    /// Apply a layer on top of this configuration
    pub fn merge(mut self, layer: PartialConfig) -> Self {
        if let Some(compiler) = layer.compiler {
            self.compiler_base = compiler;
        }
        if let Some(sources) = layer.sources {
            self.source_glob = sources;
        }
        if let Some(output) = layer.output {
            self.output_name_default = output;
        }
        self
    }
}
