use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
  #[error("{message}")]
  Validation { message: String },

  #[error("Bad template \"{template}\": {message}")]
  Template { template: String, message: String },

  #[error("Storage failed for key '{key}': {message}")]
  Storage { key: String, message: String },

  #[error("Invalid configuration in {path}: {message}")]
  Config { path: String, message: String },

  #[error("Could not serialize saved scripts: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl StudioError {
  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation { message: message.into() }
  }

  pub fn template(template: impl Into<String>, message: impl Into<String>) -> Self {
    Self::Template { template: template.into(), message: message.into() }
  }

  pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
    Self::Storage { key: key.into(), message: message.into() }
  }

  pub fn config(path: impl Into<String>, message: impl Into<String>) -> Self {
    Self::Config { path: path.into(), message: message.into() }
  }

  pub fn is_validation(&self) -> bool {
    matches!(self, Self::Validation { .. })
  }
}

pub type Result<T> = std::result::Result<T, StudioError>;
