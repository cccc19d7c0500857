//! Studio configuration
//!
//! Read from `--config`, else `.studio.json` / `studio.json` in the working
//! directory, else built-in defaults. Missing fields take their defaults.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, StudioError};
use crate::ideas::DEFAULT_NICHE;
use crate::templates::Format;

/// Overrides the data directory regardless of config
pub const DATA_DIR_ENV: &str = "STUDIO_DATA_DIR";

const CONFIG_PATHS: [&str; 2] = [".studio.json", "studio.json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  #[default]
  Pretty,
  Json,
  Html,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioConfig {
  /// Where saved scripts live
  #[serde(default)]
  pub data_dir: Option<PathBuf>,
  #[serde(default = "default_niche")]
  pub default_niche: String,
  #[serde(default)]
  pub default_format: Format,
  #[serde(default)]
  pub output: OutputFormat,
}

fn default_niche() -> String {
  DEFAULT_NICHE.to_string()
}

impl Default for StudioConfig {
  fn default() -> Self {
    Self {
      data_dir: None,
      default_niche: default_niche(),
      default_format: Format::default(),
      output: OutputFormat::default(),
    }
  }
}

impl StudioConfig {
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
      .map_err(|e| StudioError::config(path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&content)
      .map_err(|e| StudioError::config(path.display().to_string(), e.to_string()))
  }

  /// First config file found in `dir`, or defaults
  pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
    for name in CONFIG_PATHS {
      let candidate = dir.as_ref().join(name);
      if candidate.exists() {
        tracing::debug!(path = %candidate.display(), "loading config");
        return Self::load_from_file(candidate);
      }
    }
    Ok(Self::default())
  }

  pub fn load(explicit: Option<&Path>) -> Result<Self> {
    match explicit {
      Some(path) => Self::load_from_file(path),
      None => {
        let cwd = std::env::current_dir()
          .map_err(|e| StudioError::config(".", format!("no working directory: {e}")))?;
        Self::load_from_dir(cwd)
      }
    }
  }

  /// `STUDIO_DATA_DIR`, then `data_dir`, then `~/.clankervids/studio`
  pub fn resolve_data_dir(&self) -> Result<PathBuf> {
    if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
      if !custom.trim().is_empty() {
        return Ok(PathBuf::from(custom));
      }
    }

    if let Some(dir) = &self.data_dir {
      return Ok(dir.clone());
    }

    let home = dirs::home_dir()
      .ok_or_else(|| StudioError::config(DATA_DIR_ENV, "could not find home directory"))?;
    Ok(home.join(".clankervids").join("studio"))
  }
}
