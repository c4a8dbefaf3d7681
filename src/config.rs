//! Project configuration (blockies.yaml).
//!
//! Holds default icon options and the output directory for the CLI.
//! Explicit command-line options take precedence over the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BlockiesError, Result};
use crate::generate::IconOptions;

/// Default config file name.
pub const CONFIG_FILE: &str = "blockies.yaml";

/// Configuration loaded from blockies.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output directory for generated PNGs.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Cells per side.
    pub size: Option<i64>,

    /// Output pixels per cell.
    pub scale: Option<i64>,

    /// Fixed colours; unset ones are generated from the seed.
    pub color: Option<String>,
    pub bgcolor: Option<String>,
    pub spotcolor: Option<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("icons")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            size: None,
            scale: None,
            color: None,
            bgcolor: None,
            spotcolor: None,
        }
    }
}

impl Config {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BlockiesError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| BlockiesError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })
    }

    /// Load `blockies.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Icon options carried by this config.
    pub fn icon_options(&self) -> IconOptions {
        IconOptions {
            seed: None,
            size: self.size,
            scale: self.scale,
            color: self.color.clone(),
            bgcolor: self.bgcolor.clone(),
            spotcolor: self.spotcolor.clone(),
        }
    }
}
