//! Template bank
//!
//! Every content format owns five idea templates. Templates are parsed once
//! into literal segments and typed slots so generation is a single pass with no
//! string find/replace.

use clap::ValueEnum;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, StudioError};

/// Templates per format
pub const TEMPLATES_PER_FORMAT: usize = 5;

/// Named style of video content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
  PovCommentary,
  HotTake,
  MythBusting,
  QuickTutorial,
  Storytime,
}

impl Format {
  pub const ALL: [Format; 5] = [
    Format::PovCommentary,
    Format::HotTake,
    Format::MythBusting,
    Format::QuickTutorial,
    Format::Storytime,
  ];

  /// Display name
  pub fn name(self) -> &'static str {
    match self {
      Format::PovCommentary => "POV Commentary",
      Format::HotTake => "Hot Take",
      Format::MythBusting => "Myth Busting",
      Format::QuickTutorial => "Quick Tutorial",
      Format::Storytime => "Storytime",
    }
  }

  /// Identifier used on the command line and in config files
  pub fn slug(self) -> &'static str {
    match self {
      Format::PovCommentary => "pov-commentary",
      Format::HotTake => "hot-take",
      Format::MythBusting => "myth-busting",
      Format::QuickTutorial => "quick-tutorial",
      Format::Storytime => "storytime",
    }
  }

  /// The parsed templates for this format, in display order
  pub fn templates(self) -> &'static [Template] {
    BANK.get(&self).map(Vec::as_slice).unwrap_or(&[])
  }
}

impl Default for Format {
  fn default() -> Self {
    Format::PovCommentary
  }
}

impl fmt::Display for Format {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Closed set of slots a template may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
  Niche,
  Topic,
  /// Same value as `Topic`, first character upper-cased
  TopicCapitalized,
  ControversialTruth,
  HiddenInsight,
  CommonMisconception,
  Secret,
  CommonPractice,
  Thing,
  Reality,
}

impl Placeholder {
  pub fn from_name(name: &str) -> Option<Self> {
    let placeholder = match name {
      "niche" => Placeholder::Niche,
      "topic" => Placeholder::Topic,
      "Topic" => Placeholder::TopicCapitalized,
      "controversial_truth" => Placeholder::ControversialTruth,
      "hidden_insight" => Placeholder::HiddenInsight,
      "common_misconception" => Placeholder::CommonMisconception,
      "secret" => Placeholder::Secret,
      "common_practice" => Placeholder::CommonPractice,
      "thing" => Placeholder::Thing,
      "reality" => Placeholder::Reality,
      _ => return None,
    };
    Some(placeholder)
  }

  pub fn is_topic(self) -> bool {
    matches!(self, Placeholder::Topic | Placeholder::TopicCapitalized)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
  Literal(String),
  Slot(Placeholder),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
  source: &'static str,
  tokens: Vec<Token>,
}

impl Template {
  /// Parse `{name}` slots out of a template string.
  ///
  /// A stray `}` is literal text. An unclosed `{` or an unknown slot name is
  /// rejected.
  pub fn parse(source: &'static str) -> Result<Self> {
    let mut tokens = Vec::new();
    let mut rest = source;

    while let Some(open) = rest.find('{') {
      if open > 0 {
        tokens.push(Token::Literal(rest[..open].to_string()));
      }

      let after = &rest[open + 1..];
      let close = after
        .find('}')
        .ok_or_else(|| StudioError::template(source, "unclosed '{'"))?;
      let name = &after[..close];
      let placeholder = Placeholder::from_name(name)
        .ok_or_else(|| StudioError::template(source, format!("unknown placeholder '{name}'")))?;

      tokens.push(Token::Slot(placeholder));
      rest = &after[close + 1..];
    }

    if !rest.is_empty() {
      tokens.push(Token::Literal(rest.to_string()));
    }

    Ok(Self { source, tokens })
  }

  pub fn source(&self) -> &'static str {
    self.source
  }

  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  pub fn has_topic(&self) -> bool {
    self.tokens.iter().any(|t| matches!(t, Token::Slot(p) if p.is_topic()))
  }
}

fn raw_templates(format: Format) -> [&'static str; TEMPLATES_PER_FORMAT] {
  match format {
    Format::PovCommentary => [
      "POV: you just realized {controversial_truth} about {niche}",
      "POV: everyone in {niche} is obsessed with {topic} but nobody mentions {hidden_insight}",
      "POV: you stopped believing {common_misconception}",
      "POV: you finally tried {topic} the right way",
      "POV: you found out {secret}",
    ],
    Format::HotTake => [
      "Unpopular opinion: {topic} is overrated",
      "Hot take: {controversial_truth}",
      "{Topic} isn't the problem. The problem is {common_practice}",
      "Stop {common_practice} if you care about {niche}",
      "Nobody wants to admit that {reality}",
    ],
    Format::MythBusting => [
      "Myth: {common_misconception}. Reality: {reality}",
      "Everything you know about {topic} is wrong",
      "The {niche} myth that won't die: {common_misconception}",
      "Why {common_practice} doesn't actually work",
      "The truth about {topic} nobody tells you",
    ],
    Format::QuickTutorial => [
      "{Topic} in 60 seconds",
      "3 mistakes everyone makes with {topic}",
      "The {thing} every {niche} beginner needs",
      "How to get started with {topic} today",
      "The {niche} secret: {secret}",
    ],
    Format::Storytime => [
      "How {topic} changed everything for me",
      "I tried {topic} for 30 days. Here's what happened",
      "The day I learned {hidden_insight}",
      "What nobody told me about {niche}: {reality}",
      "I spent a year on {thing}. Here's the truth",
    ],
  }
}

static BANK: Lazy<HashMap<Format, Vec<Template>>> = Lazy::new(|| {
  Format::ALL
    .iter()
    .map(|&format| {
      let templates = raw_templates(format)
        .into_iter()
        .map(|source| Template::parse(source).expect("built-in templates are valid"))
        .collect();
      (format, templates)
    })
    .collect()
});
