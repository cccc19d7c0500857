//! Saved scripts
//!
//! The whole list lives as one JSON array under a single key of a string
//! key-value [`Storage`]. Every write is read-modify-write of that array; only
//! one writer is expected at a time.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StudioError};

/// Key holding the serialized script list
pub const SCRIPTS_KEY: &str = "savedScripts";

/// Raw string key-value storage
#[cfg_attr(test, mockall::automock)]
pub trait Storage {
  fn get(&self, key: &str) -> Result<Option<String>>;
  fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process storage, gone when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
  entries: HashMap<String, String>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

impl Storage for MemoryStorage {
  fn get(&self, key: &str) -> Result<Option<String>> {
    Ok(self.entries.get(key).cloned())
  }

  fn set(&mut self, key: &str, value: &str) -> Result<()> {
    self.entries.insert(key.to_string(), value.to_string());
    Ok(())
  }
}

/// One `<key>.json` file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
  root: PathBuf,
}

impl FileStorage {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  fn path_for(&self, key: &str) -> PathBuf {
    self.root.join(format!("{key}.json"))
  }
}

impl Storage for FileStorage {
  fn get(&self, key: &str) -> Result<Option<String>> {
    let path = self.path_for(key);
    if !path.exists() {
      return Ok(None);
    }
    fs::read_to_string(&path)
      .map(Some)
      .map_err(|e| StudioError::storage(key, format!("{}: {e}", path.display())))
  }

  fn set(&mut self, key: &str, value: &str) -> Result<()> {
    fs::create_dir_all(&self.root)
      .map_err(|e| StudioError::storage(key, format!("{}: {e}", self.root.display())))?;

    let path = self.path_for(key);
    fs::write(&path, value)
      .map_err(|e| StudioError::storage(key, format!("{}: {e}", path.display())))
  }
}

/// What the writer fills in before saving
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptDraft {
  pub hook: String,
  pub body: String,
  pub cta: String,
}

impl ScriptDraft {
  pub fn new(hook: impl Into<String>, body: impl Into<String>, cta: impl Into<String>) -> Self {
    Self { hook: hook.into(), body: body.into(), cta: cta.into() }
  }
}

/// A saved script. Never changed after it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
  pub hook: String,
  pub body: String,
  pub cta: String,
  /// ISO-8601, UTC, millisecond precision
  pub timestamp: String,
  /// Creation time in Unix milliseconds
  pub id: i64,
}

pub struct ScriptStore<S: Storage> {
  storage: S,
}

impl<S: Storage> ScriptStore<S> {
  pub fn new(storage: S) -> Self {
    Self { storage }
  }

  pub fn storage(&self) -> &S {
    &self.storage
  }

  /// Save stamped with the current time
  pub fn save(&mut self, draft: ScriptDraft) -> Result<Script> {
    self.save_at(draft, Utc::now())
  }

  /// Save stamped with `now`; the newest script goes first
  pub fn save_at(&mut self, draft: ScriptDraft, now: DateTime<Utc>) -> Result<Script> {
    let script = Script {
      hook: draft.hook,
      body: draft.body,
      cta: draft.cta,
      timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
      id: now.timestamp_millis(),
    };

    let mut scripts = self.list()?;
    scripts.insert(0, script.clone());
    self.persist(&scripts)?;

    tracing::debug!(id = script.id, total = scripts.len(), "saved script");
    Ok(script)
  }

  /// Saved scripts, most recent first
  pub fn list(&self) -> Result<Vec<Script>> {
    let Some(raw) = self.storage.get(SCRIPTS_KEY)? else {
      return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<Script>>(&raw) {
      Ok(scripts) => Ok(scripts),
      Err(e) => {
        tracing::warn!(error = %e, "saved scripts are unreadable, starting from an empty list");
        Ok(Vec::new())
      }
    }
  }

  pub fn get(&self, id: i64) -> Result<Option<Script>> {
    Ok(self.list()?.into_iter().find(|script| script.id == id))
  }

  /// Remove every script with `id`, returning how many went
  pub fn delete(&mut self, id: i64) -> Result<usize> {
    let scripts = self.list()?;
    let before = scripts.len();
    let kept: Vec<Script> = scripts.into_iter().filter(|script| script.id != id).collect();
    let removed = before - kept.len();

    self.persist(&kept)?;

    tracing::debug!(id, removed, "deleted script");
    Ok(removed)
  }

  fn persist(&mut self, scripts: &[Script]) -> Result<()> {
    let raw = serde_json::to_string(scripts)?;
    self.storage.set(SCRIPTS_KEY, &raw)
  }
}
