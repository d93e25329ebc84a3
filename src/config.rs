//! Configuration loaded from YAML
//!
//! ```yaml
//! export:
//!   renderer_program: dot
//!   image_format: svg
//!   default_depth: 2
//!   output_dir: /tmp/networks
//! ```
//!
//! Every key is optional. Without a file, [`Config::default`] applies.

use crate::export::GraphvizRenderer;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportConfig,
}

/// Settings for `create_user_graph`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Graphviz executable used for image rendering
    pub renderer_program: String,
    /// Image format passed to the renderer
    pub image_format: String,
    /// Hops exported when no depth is given
    pub default_depth: usize,
    /// Directory that relative output paths are resolved against
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            renderer_program: "dot".to_string(),
            image_format: "png".to_string(),
            default_depth: 1,
            output_dir: None,
        }
    }
}

impl ExportConfig {
    /// Renderer configured from these settings
    pub fn renderer(&self) -> GraphvizRenderer {
        GraphvizRenderer::new()
            .with_program(&self.renderer_program)
            .with_format(&self.image_format)
    }

    /// Resolve an output base path against `output_dir`
    pub fn resolve_output(&self, base: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if base.is_relative() => dir.join(base),
            _ => base.to_path_buf(),
        }
    }
}

impl Config {
    /// Parse configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Load `path`, or the default config file if present, or defaults.
    ///
    /// An explicitly given path must exist; the default location is optional.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Default config location (~/.config/friendgraph/config.yaml on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("friendgraph").join("config.yaml"))
}
