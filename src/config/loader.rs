// file: src/config/loader.rs
// version: 1.0.0
// guid: a09f54f2-71a9-40c4-9d31-1a98fab2c00d

//! Layered configuration loading: defaults, project file, explicit file, environment

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use super::{PartialConfig, StaticConfig, ENV_COMPILER, ENV_OUTPUT, ENV_SOURCES, PROJECT_CONFIG_FILE};
use crate::error::{BuildError, Result};

/// Configuration loader with environment variable overrides
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
    working_dir: PathBuf,
}

impl ConfigLoader {
    /// Create a loader reading the process environment and current directory
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
            working_dir: PathBuf::from("."),
        }
    }

    /// Create a loader with an explicit environment, for embedding and tests
    pub fn with_env(env_vars: HashMap<String, String>) -> Self {
        Self {
            env_vars,
            working_dir: PathBuf::from("."),
        }
    }

    /// Look for the project config file in `dir` instead of the current directory
    pub fn working_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// Set environment variable for overrides
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }

    /// Load the effective configuration. `explicit` must exist when given.
    pub async fn load(&self, explicit: Option<&Path>) -> Result<StaticConfig> {
        let mut config = StaticConfig::default();

        let project_config = self.working_dir.join(PROJECT_CONFIG_FILE);
        if fs::try_exists(&project_config).await.unwrap_or(false) {
            info!(
                "Loading project configuration from: {}",
                project_config.display()
            );
            config = config.merge(Self::load_layer(&project_config).await?);
        }

        if let Some(path) = explicit {
            info!("Loading configuration from: {}", path.display());
            config = config.merge(Self::load_layer(path).await?);
        }

        config = config.merge(self.env_layer());

        debug!("Final configuration: {:#?}", config);
        Ok(config)
    }

    /// Read and parse one TOML layer
    async fn load_layer(path: &Path) -> Result<PartialConfig> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            BuildError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            BuildError::config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Environment overrides; empty values are ignored
    fn env_layer(&self) -> PartialConfig {
        let lookup = |key: &str| {
            self.env_vars
                .get(key)
                .filter(|value| !value.is_empty())
                .cloned()
        };

        PartialConfig {
            compiler: lookup(ENV_COMPILER),
            sources: lookup(ENV_SOURCES),
            output: lookup(ENV_OUTPUT),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn isolated_loader(dir: &TempDir) -> ConfigLoader {
        ConfigLoader::with_env(HashMap::new()).working_dir(dir.path())
    }

    #[tokio::test]
    async fn test_load_defaults() -> Result<()> {
        let dir = TempDir::new().unwrap();

        let config = isolated_loader(&dir).load(None).await?;

        assert_eq!(config, StaticConfig::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_project_file_is_picked_up() -> Result<()> {
        // Arrange
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "output = \"game\"\n",
        )
        .unwrap();

        // Act
        let config = isolated_loader(&dir).load(None).await?;

        // Assert
        assert_eq!(config.output_name_default, "game");
        assert_eq!(config.compiler_base, "g++ -g -std=c++17");
        Ok(())
    }

    #[tokio::test]
    async fn test_explicit_file_overrides_project_file() -> Result<()> {
        // Arrange
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "output = \"game\"\nsources = \"./lib/*.cc\"\n",
        )
        .unwrap();
        let mut explicit = NamedTempFile::new().unwrap();
        writeln!(explicit, "output = \"editor\"").unwrap();

        // Act
        let config = isolated_loader(&dir).load(Some(explicit.path())).await?;

        // Assert
        assert_eq!(config.output_name_default, "editor");
        assert_eq!(config.source_glob, "./lib/*.cc");
        Ok(())
    }

    #[tokio::test]
    async fn test_env_overrides_files() -> Result<()> {
        // Arrange
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "compiler = \"g++\"\n").unwrap();
        let mut loader = isolated_loader(&dir);
        loader.set_env_var(ENV_COMPILER.to_string(), "clang++".to_string());
        loader.set_env_var(ENV_OUTPUT.to_string(), String::new());

        // Act
        let config = loader.load(None).await?;

        // Assert
        assert_eq!(config.compiler_base, "clang++");
        assert_eq!(config.output_name_default, "prog");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let result = isolated_loader(&dir).load(Some(&missing)).await;

        assert!(matches!(result, Err(BuildError::Config(_))));
        assert!(result.unwrap_err().to_string().contains("Failed to read config file"));
    }

    #[tokio::test]
    async fn test_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "compiler = [").unwrap();

        let result = isolated_loader(&dir).load(Some(file.path())).await;

        assert!(result.unwrap_err().to_string().contains("Failed to parse config file"));
    }
}
