use anyhow::{anyhow, Result};
use colored::*;
use serde::Serialize;

use crate::analyzer::{self, Analysis};
use crate::config::{OutputFormat, StudioConfig};
use crate::error::StudioError;
use crate::hooks::{self, HookScore};
use crate::ideas::IdeaGenerator;
use crate::placeholders::KNOWN_NICHES;
use crate::render;
use crate::store::{Script, ScriptDraft, ScriptStore, Storage};
use crate::templates::Format;

#[derive(Debug, Serialize)]
struct IdeasOutput<'a> {
  format: &'a str,
  niche: &'a str,
  ideas: &'a [String],
}

#[derive(Debug, Serialize)]
struct DeleteOutput {
  id: i64,
  removed: usize,
}

#[derive(Debug, Serialize)]
struct FormatOutput {
  slug: &'static str,
  name: &'static str,
  templates: Vec<&'static str>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

fn colored_score(score: u8) -> ColoredString {
  let text = format!("{score}/10");
  match score {
    8..=10 => text.green().bold(),
    6..=7 => text.yellow().bold(),
    _ => text.red().bold(),
  }
}

/// Generate ideas for a niche and format, falling back to the configured defaults
pub fn generate_ideas(
  config: &StudioConfig,
  niche: Option<&str>,
  format: Option<Format>,
  output: OutputFormat,
) -> Result<()> {
  let generator = IdeaGenerator::new(config.default_niche.clone());
  let format = format.unwrap_or(config.default_format);
  let niche = match niche.map(str::trim) {
    Some(n) if !n.is_empty() => n,
    _ => generator.default_niche(),
  };
  let ideas = generator.generate(niche, format);

  match output {
    OutputFormat::Json => {
      print_json(&IdeasOutput { format: format.name(), niche, ideas: &ideas })?
    }
    OutputFormat::Html => print!("{}", render::ideas_html(format, niche, &ideas)),
    OutputFormat::Pretty => {
      println!("{} {} ideas for {}", "💡".yellow(), format.name().bold(), niche.cyan());
      for (i, idea) in ideas.iter().enumerate() {
        println!("  {}. {}", i + 1, idea);
      }
    }
  }
  Ok(())
}

pub fn score_hook(text: &str, output: OutputFormat) -> Result<()> {
  let result: HookScore = hooks::score_hook(text);

  match output {
    OutputFormat::Json => print_json(&result)?,
    OutputFormat::Html => print!("{}", render::hook_score_html(&result)),
    OutputFormat::Pretty => {
      println!("Hook strength: {}", colored_score(result.score));
      println!("{}", result.feedback);
      let matched = hooks::matched_patterns(text);
      if !matched.is_empty() {
        println!("{} {}", "Matched:".dimmed(), matched.join(", ").dimmed());
      }
    }
  }
  Ok(())
}

fn print_analysis(analysis: &Analysis, output: OutputFormat) -> Result<()> {
  match output {
    OutputFormat::Json => print_json(analysis)?,
    OutputFormat::Html => print!("{}", render::analysis_html(analysis)),
    OutputFormat::Pretty => {
      println!("Hook strength:      {}", colored_score(analysis.hook_strength));
      println!("Estimated duration: {}s", analysis.estimated_duration);
      println!("Word count:         {}", analysis.word_count);
      println!(
        "Call-to-action:     {}",
        if analysis.has_cta { "yes".green() } else { "missing".red() }
      );
      println!();
      for tip in &analysis.tips {
        println!("  {} {}", "•".magenta(), tip);
      }
    }
  }
  Ok(())
}

pub fn analyze_script(draft: &ScriptDraft, output: OutputFormat) -> Result<()> {
  let analysis = analyzer::analyze(&draft.hook, &draft.body, &draft.cta)?;
  print_analysis(&analysis, output)
}

pub fn save_script<S: Storage>(
  store: &mut ScriptStore<S>,
  draft: ScriptDraft,
  output: OutputFormat,
) -> Result<()> {
  if draft.hook.trim().is_empty() && draft.body.trim().is_empty() {
    let message = "Nothing to save: write a hook or a script body first.";
    return Err(StudioError::validation(message).into());
  }

  let script = store.save(draft)?;

  match output {
    OutputFormat::Json => print_json(&script)?,
    OutputFormat::Html => print!("{}", render::scripts_html(std::slice::from_ref(&script))),
    OutputFormat::Pretty => marquee::success!("Saved script {}", script.id.to_string().yellow()),
  }
  Ok(())
}

fn print_script(script: &Script) {
  println!("{} {}", format!("#{}", script.id).yellow(), script.timestamp.dimmed());
  println!("  {} {}", "Hook:".bold(), script.hook);
  if !script.body.trim().is_empty() {
    println!("  {} {}", "Body:".bold(), script.body);
  }
  if !script.cta.trim().is_empty() {
    println!("  {} {}", "CTA:".bold(), script.cta);
  }
}

pub fn list_scripts<S: Storage>(store: &ScriptStore<S>, output: OutputFormat) -> Result<()> {
  let scripts = store.list()?;

  match output {
    OutputFormat::Json => print_json(&scripts)?,
    OutputFormat::Html => print!("{}", render::scripts_html(&scripts)),
    OutputFormat::Pretty => {
      if scripts.is_empty() {
        marquee::info!("No saved scripts yet");
      }
      for script in &scripts {
        print_script(script);
        println!();
      }
    }
  }
  Ok(())
}

pub fn show_script<S: Storage>(
  store: &ScriptStore<S>,
  id: i64,
  output: OutputFormat,
) -> Result<()> {
  let script = store.get(id)?.ok_or_else(|| anyhow!("Script {} not found", id))?;

  match output {
    OutputFormat::Json => print_json(&script)?,
    OutputFormat::Html => print!("{}", render::scripts_html(std::slice::from_ref(&script))),
    OutputFormat::Pretty => print_script(&script),
  }
  Ok(())
}

/// Delete every saved script with `id`. An unknown id only warns.
pub fn delete_script<S: Storage>(
  store: &mut ScriptStore<S>,
  id: i64,
  output: OutputFormat,
) -> Result<()> {
  let removed = store.delete(id)?;

  if removed == 0 {
    marquee::warn!("No saved script with id {id}");
  }

  match output {
    OutputFormat::Json => print_json(&DeleteOutput { id, removed })?,
    OutputFormat::Html if removed > 0 => {
      println!("<p class=\"deleted\" data-id=\"{id}\">Deleted script {id}</p>")
    }
    _ if removed > 0 => marquee::success!("Deleted script {}", id.to_string().yellow()),
    _ => {}
  }
  Ok(())
}

pub fn list_formats(output: OutputFormat) -> Result<()> {
  let formats: Vec<FormatOutput> = Format::ALL
    .iter()
    .map(|format| FormatOutput {
      slug: format.slug(),
      name: format.name(),
      templates: format.templates().iter().map(|t| t.source()).collect(),
    })
    .collect();

  match output {
    OutputFormat::Json => print_json(&formats)?,
    OutputFormat::Html => {
      println!("<ul class=\"formats\">");
      for format in &formats {
        println!("<li data-slug=\"{}\">{}</li>", format.slug, render::escape_html(format.name));
      }
      println!("</ul>");
    }
    OutputFormat::Pretty => {
      for format in &formats {
        println!("{:<16} {}", format.slug.cyan(), format.name);
      }
    }
  }
  Ok(())
}

pub fn list_niches(output: OutputFormat) -> Result<()> {
  match output {
    OutputFormat::Json => print_json(&KNOWN_NICHES)?,
    OutputFormat::Html => {
      println!("<ul class=\"niches\">");
      for niche in KNOWN_NICHES {
        println!("<li>{niche}</li>");
      }
      println!("</ul>");
    }
    OutputFormat::Pretty => {
      for niche in KNOWN_NICHES {
        println!("{}", niche.cyan());
      }
      println!("{}", "Any other niche uses the general topic list".dimmed());
    }
  }
  Ok(())
}
