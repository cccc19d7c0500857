use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use studio::commands;
use studio::{
  FileStorage, Format, OutputFormat, ScriptDraft, ScriptStore, StudioConfig, StudioError,
};

#[derive(Parser)]
#[command(name = "studio")]
#[command(about = "ClankerVids Content Studio")]
#[command(long_about = "Video ideas, hook scoring and a notebook for short-form scripts")]
#[command(version)]
struct Cli {
  /// Configuration file (defaults to .studio.json or studio.json)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,

  /// Output style, overrides the configured one
  #[arg(short, long, global = true)]
  output: Option<OutputFormat>,

  /// Show debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

/// The three parts of a script
#[derive(Args)]
struct ScriptText {
  /// Opening line
  #[arg(long, default_value = "")]
  hook: String,
  /// Main script
  #[arg(long, default_value = "")]
  body: String,
  /// Closing call-to-action
  #[arg(long, default_value = "")]
  cta: String,
}

impl From<ScriptText> for ScriptDraft {
  fn from(text: ScriptText) -> Self {
    ScriptDraft::new(text.hook, text.body, text.cta)
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Generate five video ideas for a niche
  Ideas {
    /// Subject area, e.g. tech or fitness
    #[arg(short, long)]
    niche: Option<String>,
    /// Content format
    #[arg(short, long)]
    format: Option<Format>,
  },
  /// Score a hook from 0 to 10
  Score {
    /// Hook text
    text: String,
  },
  /// Analyze a full script
  Analyze {
    #[command(flatten)]
    script: ScriptText,
  },
  /// Save a script to the notebook
  Save {
    #[command(flatten)]
    script: ScriptText,
  },
  /// List saved scripts, newest first
  Scripts,
  /// Show one saved script
  Show {
    /// Script id
    id: i64,
  },
  /// Delete a saved script
  Delete {
    /// Script id
    id: i64,
  },
  /// List content formats
  Formats,
  /// List niches with their own topic lists
  Niches,
}

fn open_store(config: &StudioConfig) -> Result<ScriptStore<FileStorage>> {
  let data_dir = config.resolve_data_dir()?;
  tracing::debug!(data_dir = %data_dir.display(), "opening script store");
  Ok(ScriptStore::new(FileStorage::new(data_dir)))
}

fn run(cli: Cli) -> Result<()> {
  let config = StudioConfig::load(cli.config.as_deref())?;
  let output = cli.output.unwrap_or(config.output);

  match cli.command {
    Commands::Ideas { niche, format } => {
      commands::generate_ideas(&config, niche.as_deref(), format, output)?;
    }
    Commands::Score { text } => {
      commands::score_hook(&text, output)?;
    }
    Commands::Analyze { script } => {
      let draft: ScriptDraft = script.into();
      commands::analyze_script(&draft, output)?;
    }
    Commands::Save { script } => {
      let mut store = open_store(&config)?;
      commands::save_script(&mut store, script.into(), output)?;
    }
    Commands::Scripts => {
      let store = open_store(&config)?;
      commands::list_scripts(&store, output)?;
    }
    Commands::Show { id } => {
      let store = open_store(&config)?;
      commands::show_script(&store, id, output)?;
    }
    Commands::Delete { id } => {
      let mut store = open_store(&config)?;
      commands::delete_script(&mut store, id, output)?;
    }
    Commands::Formats => {
      commands::list_formats(output)?;
    }
    Commands::Niches => {
      commands::list_niches(output)?;
    }
  }

  Ok(())
}

fn main() {
  let cli = Cli::parse();
  marquee::init(cli.verbose);

  if let Err(e) = run(cli) {
    match e.downcast_ref::<StudioError>() {
      Some(err) if err.is_validation() => marquee::notice!("{err}"),
      _ => marquee::error!("{e:#}"),
    }
    process::exit(1);
  }
}
