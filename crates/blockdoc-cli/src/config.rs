//! Configuration loading.
//!
//! `defaults/blockdoc.default.toml` is embedded into the binary. User files
//! are layered on top of it via [`Loader`] before deserializing into
//! [`CliConfig`].

use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;

const DEFAULT_TOML: &str = include_str!("../defaults/blockdoc.default.toml");

/// Optional per-directory configuration file.
pub const LOCAL_CONFIG: &str = "blockdoc.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    pub output: OutputConfig,
    pub reflection: ReflectionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

/// How `parse` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable block summary.
    Text,
    /// Typed blocks as JSON.
    Json,
    /// Stored records as JSON.
    Portable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReflectionConfig {
    pub publish: bool,
    pub author: String,
}

/// Layers user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    pub fn build(self) -> Result<CliConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load defaults, then `blockdoc.toml` if present, then `explicit` if given.
pub fn load(explicit: Option<&Path>) -> Result<CliConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = explicit {
        log::debug!("loading config from {}", path.display());
        loader = loader.with_file(path);
    }
    loader.build()
}
