//! Script analysis: hook strength, runtime estimate and writing tips

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};
use crate::hooks;

/// Spoken words per second used for the runtime estimate
pub const WORDS_PER_SECOND: f64 = 2.5;

const WEAK_HOOK_BELOW: u8 = 6;
const MAX_SECONDS: u32 = 60;
const MIN_SECONDS: u32 = 15;
const MAX_BODY_WORDS: usize = 150;

pub const TIP_STRENGTHEN_HOOK: &str =
  "Strengthen your hook: open with a POV, a number, or a \"Nobody...\" statement.";
pub const TIP_TOO_LONG: &str =
  "Too long for short-form. Trim it to land between 20 and 60 seconds.";
pub const TIP_TOO_SHORT: &str =
  "Very short. Add more substance so the video delivers on the hook.";
pub const TIP_ADD_CTA: &str = "Add a call-to-action or payoff to close the video.";
pub const TIP_TIGHTEN: &str = "The body runs long. Tighten it and cut the filler.";
pub const TIP_READY: &str = "Looks great! This script is ready to film.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
  pub hook_strength: u8,
  /// Seconds
  pub estimated_duration: u32,
  pub word_count: usize,
  #[serde(rename = "hasCTA")]
  pub has_cta: bool,
  pub tips: Vec<String>,
}

/// Whitespace-separated words, runs of whitespace count once
pub fn word_count(text: &str) -> usize {
  text.split_whitespace().count()
}

/// `round(words / 2.5)`, half up
pub fn estimate_duration(words: usize) -> u32 {
  (words as f64 / WORDS_PER_SECOND + 0.5).floor() as u32
}

pub fn analyze(hook: &str, body: &str, cta: &str) -> Result<Analysis> {
  if hook.trim().is_empty() && body.trim().is_empty() {
    return Err(StudioError::validation("Please write a hook or a script body to analyze."));
  }

  let hook_strength = hooks::score(hook);
  let word_count = word_count(body);
  let estimated_duration = estimate_duration(word_count);
  let has_cta = !cta.trim().is_empty();

  let mut tips = Vec::new();
  if hook_strength < WEAK_HOOK_BELOW {
    tips.push(TIP_STRENGTHEN_HOOK);
  }
  if estimated_duration > MAX_SECONDS {
    tips.push(TIP_TOO_LONG);
  }
  if estimated_duration < MIN_SECONDS {
    tips.push(TIP_TOO_SHORT);
  }
  if !has_cta {
    tips.push(TIP_ADD_CTA);
  }
  if word_count > MAX_BODY_WORDS {
    tips.push(TIP_TIGHTEN);
  }
  if tips.is_empty() {
    tips.push(TIP_READY);
  }

  tracing::debug!(hook_strength, word_count, estimated_duration, has_cta, "analyzed script");

  Ok(Analysis {
    hook_strength,
    estimated_duration,
    word_count,
    has_cta,
    tips: tips.into_iter().map(String::from).collect(),
  })
}
