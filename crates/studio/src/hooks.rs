//! Hook strength scoring
//!
//! A hook starts at a fixed baseline and every row of the pattern table that
//! matches adds its weight. Length and a question mark nudge the total, which
//! is clamped to 0..=10 and rounded half up.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const BASELINE: f64 = 5.0;
pub const MAX_SCORE: u8 = 10;

const SHORT_HOOK_CHARS: usize = 50;
const LONG_HOOK_CHARS: usize = 100;
const SHORT_BONUS: f64 = 1.0;
const LONG_PENALTY: f64 = -1.0;
const QUESTION_BONUS: f64 = 0.5;

const STRONG_WEIGHT: f64 = 1.0;
const WEAK_WEIGHT: f64 = -2.0;

/// One row of the pattern table
pub struct HookPattern {
  pub label: &'static str,
  pub regex: Regex,
  pub weight: f64,
}

impl HookPattern {
  fn new(label: &'static str, pattern: &str, weight: f64) -> Self {
    Self { label, regex: Regex::new(pattern).expect("built-in hook pattern"), weight }
  }

  pub fn is_strong(&self) -> bool {
    self.weight > 0.0
  }
}

static PATTERNS: Lazy<Vec<HookPattern>> = Lazy::new(|| {
  vec![
    // Openers that stop the scroll
    HookPattern::new("pov opener", r"(?i)^pov:", STRONG_WEIGHT),
    HookPattern::new("nobody opener", r"(?i)^nobody", STRONG_WEIGHT),
    HookPattern::new("what opener", r"(?i)^what", STRONG_WEIGHT),
    HookPattern::new("why opener", r"(?i)^why", STRONG_WEIGHT),
    HookPattern::new("truth opener", r"(?i)^the truth", STRONG_WEIGHT),
    HookPattern::new("numbered list", r"(?i)\d+ (things|ways|secrets|mistakes)", STRONG_WEIGHT),
    HookPattern::new("direct call-out", r"(?i)you('re| are) (doing|making|missing)", STRONG_WEIGHT),
    HookPattern::new("absolute", r"(?i)(don't|never|always)", STRONG_WEIGHT),
    // Warm-up openers that lose the viewer
    HookPattern::new("hey guys opener", r"(?i)^hey guys", WEAK_WEIGHT),
    HookPattern::new("welcome opener", r"(?i)^welcome", WEAK_WEIGHT),
    HookPattern::new("today opener", r"(?i)^today", WEAK_WEIGHT),
    HookPattern::new("in this video opener", r"(?i)^in this video", WEAK_WEIGHT),
    HookPattern::new("so opener", r"(?i)^so", WEAK_WEIGHT),
  ]
});

/// The full pattern table, strong rows first
pub fn patterns() -> &'static [HookPattern] {
  &PATTERNS
}

/// Score paired with a one-line hint for the writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookScore {
  pub score: u8,
  pub feedback: String,
}

/// Integer hook strength in 0..=10. Blank input scores 0.
pub fn score(text: &str) -> u8 {
  let text = text.trim();
  if text.is_empty() {
    return 0;
  }

  let mut total = BASELINE;

  for pattern in patterns() {
    if pattern.regex.is_match(text) {
      total += pattern.weight;
    }
  }

  let length = text.chars().count();
  if length < SHORT_HOOK_CHARS {
    total += SHORT_BONUS;
  }
  if length > LONG_HOOK_CHARS {
    total += LONG_PENALTY;
  }

  if text.contains('?') {
    total += QUESTION_BONUS;
  }

  // Non-negative after the clamp, so +0.5 then floor is round-half-up
  (total.clamp(0.0, MAX_SCORE as f64) + 0.5).floor() as u8
}

/// Labels of the table rows that match, for explaining a score
pub fn matched_patterns(text: &str) -> Vec<&'static str> {
  let text = text.trim();
  patterns().iter().filter(|p| p.regex.is_match(text)).map(|p| p.label).collect()
}

pub fn feedback(score: u8, blank: bool) -> &'static str {
  if blank {
    return "Enter a hook to score it.";
  }
  match score {
    8..=10 => "Strong hook! This should stop the scroll.",
    6..=7 => "Decent hook. A bolder opener or a number could push it higher.",
    _ => "Weak hook. Try a POV, a number, or a \"Nobody...\" opener.",
  }
}

pub fn score_hook(text: &str) -> HookScore {
  let value = score(text);
  HookScore { score: value, feedback: feedback(value, text.trim().is_empty()).to_string() }
}
