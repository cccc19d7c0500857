use rand::Rng;

use crate::placeholders::{capitalize_first, fixed_filler, pick_topic};
use crate::templates::{Format, Placeholder, Template, Token};

/// Niche used when the caller leaves it blank
pub const DEFAULT_NICHE: &str = "tech";

/// Turns a format's templates into idea lines for a niche
#[derive(Debug, Clone)]
pub struct IdeaGenerator {
  default_niche: String,
}

impl Default for IdeaGenerator {
  fn default() -> Self {
    Self::new(DEFAULT_NICHE)
  }
}

impl IdeaGenerator {
  pub fn new(default_niche: impl Into<String>) -> Self {
    let default_niche = default_niche.into();
    let default_niche = match default_niche.trim() {
      "" => DEFAULT_NICHE.to_string(),
      trimmed => trimmed.to_string(),
    };
    Self { default_niche }
  }

  pub fn default_niche(&self) -> &str {
    &self.default_niche
  }

  /// One idea per template of `format`, in template order
  pub fn generate(&self, niche: &str, format: Format) -> Vec<String> {
    self.generate_with_rng(niche, format, &mut rand::thread_rng())
  }

  pub fn generate_with_rng<R: Rng + ?Sized>(
    &self,
    niche: &str,
    format: Format,
    rng: &mut R,
  ) -> Vec<String> {
    let niche = match niche.trim() {
      "" => self.default_niche.as_str(),
      trimmed => trimmed,
    };

    let ideas: Vec<String> =
      format.templates().iter().map(|template| fill(template, niche, rng)).collect();

    tracing::debug!(format = format.slug(), niche, count = ideas.len(), "generated ideas");
    ideas
  }
}

/// Generate with the built-in default niche
pub fn generate(niche: &str, format: Format) -> Vec<String> {
  IdeaGenerator::default().generate(niche, format)
}

fn fill<R: Rng + ?Sized>(template: &Template, niche: &str, rng: &mut R) -> String {
  let topic = if template.has_topic() { pick_topic(niche, rng) } else { "" };

  let mut idea = String::with_capacity(template.source().len() + 32);
  for token in template.tokens() {
    match token {
      Token::Literal(text) => idea.push_str(text),
      Token::Slot(Placeholder::Niche) => idea.push_str(niche),
      Token::Slot(Placeholder::Topic) => idea.push_str(topic),
      Token::Slot(Placeholder::TopicCapitalized) => idea.push_str(&capitalize_first(topic)),
      Token::Slot(other) => idea.push_str(fixed_filler(*other).unwrap_or_default()),
    }
  }
  idea
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::placeholders::topics_for;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn test_every_format_yields_five_resolved_ideas() {
    let generator = IdeaGenerator::default();
    let mut rng = StdRng::seed_from_u64(42);
    for format in Format::ALL {
      for niche in ["tech", "Fitness", "knitting", ""] {
        let ideas = generator.generate_with_rng(niche, format, &mut rng);
        assert_eq!(ideas.len(), 5);
        for idea in &ideas {
          assert!(!idea.contains('{'), "unresolved slot in {idea:?}");
          assert!(!idea.contains('}'), "unresolved slot in {idea:?}");
        }
      }
    }
  }

  #[test]
  fn test_blank_niche_falls_back_to_default() {
    let generator = IdeaGenerator::default();
    let mut rng = StdRng::seed_from_u64(1);
    let ideas = generator.generate_with_rng("   ", Format::PovCommentary, &mut rng);
    assert_eq!(ideas[0], "POV: you just realized most advice online is recycled about tech");
  }

  #[test]
  fn test_configured_default_niche() {
    let generator = IdeaGenerator::new("gaming");
    assert_eq!(generator.default_niche(), "gaming");
    let mut rng = StdRng::seed_from_u64(3);
    let ideas = generator.generate_with_rng("", Format::QuickTutorial, &mut rng);
    assert_eq!(ideas[4], "The gaming secret: the basics matter more than the hacks");

    assert_eq!(IdeaGenerator::new("  ").default_niche(), DEFAULT_NICHE);
  }

  #[test]
  fn test_niche_is_inserted_as_typed() {
    let mut rng = StdRng::seed_from_u64(5);
    let ideas =
      IdeaGenerator::default().generate_with_rng(" Vintage Cars ", Format::MythBusting, &mut rng);
    assert_eq!(ideas[2], "The Vintage Cars myth that won't die: you need expensive gear to start");
  }

  #[test]
  fn test_topics_come_from_the_niche_list() {
    let mut rng = StdRng::seed_from_u64(9);
    let ideas = IdeaGenerator::default().generate_with_rng("finance", Format::Storytime, &mut rng);
    let topic = ideas[0]
      .strip_prefix("How ")
      .and_then(|rest| rest.strip_suffix(" changed everything for me"))
      .unwrap();
    assert!(topics_for("finance").contains(&topic));
  }

  #[test]
  fn test_capitalized_topic_uses_a_topic_from_the_list() {
    let mut rng = StdRng::seed_from_u64(11);
    let ideas =
      IdeaGenerator::default().generate_with_rng("cooking", Format::QuickTutorial, &mut rng);
    let topic = ideas[0].strip_suffix(" in 60 seconds").unwrap();
    assert!(topics_for("cooking").iter().any(|t| capitalize_first(t) == topic));
  }

  #[test]
  fn test_repeated_slots_share_one_topic() {
    let template = Template::parse("{topic} vs {Topic}").unwrap();
    let mut rng = StdRng::seed_from_u64(13);
    let idea = fill(&template, "gaming", &mut rng);
    let (left, right) = idea.split_once(" vs ").unwrap();
    assert_eq!(capitalize_first(left), right);
  }

  #[test]
  fn test_same_seed_same_ideas() {
    let generator = IdeaGenerator::default();
    let a = generator.generate_with_rng("tech", Format::HotTake, &mut StdRng::seed_from_u64(21));
    let b = generator.generate_with_rng("tech", Format::HotTake, &mut StdRng::seed_from_u64(21));
    assert_eq!(a, b);
  }

  #[test]
  fn test_free_function_generates_five() {
    assert_eq!(generate("", Format::Storytime).len(), 5);
  }
}
