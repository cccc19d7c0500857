//! Studio - short-form video writing tools
//!
//! Idea generation from format templates, hook strength scoring, script
//! analysis and a local notebook of saved scripts. Everything here is
//! synchronous and works without network access.

pub mod analyzer;
pub mod commands;
pub mod config;
pub mod error;
pub mod hooks;
pub mod ideas;
pub mod placeholders;
pub mod render;
pub mod store;
pub mod templates;

pub use analyzer::{analyze, Analysis};
pub use config::{OutputFormat, StudioConfig};
pub use error::{Result, StudioError};
pub use hooks::{score, score_hook, HookScore};
pub use ideas::{generate, IdeaGenerator};
pub use store::{FileStorage, MemoryStorage, Script, ScriptDraft, ScriptStore, Storage};
pub use templates::Format;
