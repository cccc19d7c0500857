//! Filler values for template slots

use rand::seq::SliceRandom;
use rand::Rng;

use crate::templates::Placeholder;

/// Niches with their own topic list
pub const KNOWN_NICHES: [&str; 5] = ["tech", "fitness", "finance", "cooking", "gaming"];

const TECH_TOPICS: &[&str] = &[
  "AI tools",
  "coding",
  "smartphones",
  "productivity apps",
  "cybersecurity",
  "smart home gadgets",
];
const FITNESS_TOPICS: &[&str] =
  &["strength training", "cardio", "meal prep", "mobility work", "home workouts", "protein intake"];
const FINANCE_TOPICS: &[&str] =
  &["budgeting", "index funds", "side hustles", "credit scores", "emergency funds", "crypto"];
const COOKING_TOPICS: &[&str] =
  &["meal prep", "knife skills", "air fryers", "sourdough", "spice blends", "cast iron pans"];
const GAMING_TOPICS: &[&str] =
  &["speedrunning", "game design", "streaming", "retro games", "esports", "indie games"];
const DEFAULT_TOPICS: &[&str] =
  &["productivity", "habits", "learning new skills", "creativity", "motivation", "side projects"];

/// Topic list for a niche: exact match on the trimmed, lowercased niche
pub fn topics_for(niche: &str) -> &'static [&'static str] {
  match niche.trim().to_lowercase().as_str() {
    "tech" => TECH_TOPICS,
    "fitness" => FITNESS_TOPICS,
    "finance" => FINANCE_TOPICS,
    "cooking" => COOKING_TOPICS,
    "gaming" => GAMING_TOPICS,
    _ => DEFAULT_TOPICS,
  }
}

pub fn is_known_niche(niche: &str) -> bool {
  let key = niche.trim().to_lowercase();
  KNOWN_NICHES.contains(&key.as_str())
}

/// Uniform pick from the niche's topic list
pub fn pick_topic<R: Rng + ?Sized>(niche: &str, rng: &mut R) -> &'static str {
  topics_for(niche).choose(rng).copied().unwrap_or("content")
}

/// Constant filler for the non-topic slots. These ignore the niche.
pub fn fixed_filler(placeholder: Placeholder) -> Option<&'static str> {
  let value = match placeholder {
    Placeholder::ControversialTruth => "most advice online is recycled",
    Placeholder::HiddenInsight => "consistency beats intensity",
    Placeholder::CommonMisconception => "you need expensive gear to start",
    Placeholder::Secret => "the basics matter more than the hacks",
    Placeholder::CommonPractice => "copying whatever is trending",
    Placeholder::Thing => "one simple habit",
    Placeholder::Reality => "nobody has it all figured out",
    Placeholder::Niche | Placeholder::Topic | Placeholder::TopicCapitalized => return None,
  };
  Some(value)
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize_first(value: &str) -> String {
  let mut chars = value.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
