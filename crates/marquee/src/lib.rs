//! Marquee - console status lines for ClankerVids tools
//!
//! Two channels:
//!
//! - Status lines for the person at the terminal: `info!`, `warn!`, `error!`,
//!   `success!` and `notice!`. Always stderr so stdout stays clean for piping
//!   results.
//! - Diagnostics through `tracing`, configured once with `init()`.

use colored::*;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
  Info,
  Warn,
  Error,
  Success,
  Notice,
}

impl Level {
  fn tag(self) -> &'static str {
    match self {
      Level::Info => "info",
      Level::Warn => "warn",
      Level::Error => "error",
      Level::Success => "done",
      Level::Notice => "note",
    }
  }

  fn color(self) -> Color {
    match self {
      Level::Info => Color::Blue,
      Level::Warn => Color::Yellow,
      Level::Error => Color::Red,
      Level::Success => Color::Green,
      Level::Notice => Color::Magenta,
    }
  }
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise verbose mode shows studio debug output
/// and normal mode only warnings. Calling twice is harmless.
pub fn init(verbose: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if verbose {
      EnvFilter::new("studio=debug,marquee=debug,warn")
    } else {
      EnvFilter::new("warn")
    }
  });

  let _ = tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .with(filter)
    .try_init();
}

/// Format one message as prefixed lines, one per input line
pub fn format_lines(level: Level, message: &str) -> Vec<String> {
  let tag = format!("[{}]", level.tag().color(level.color()).bold());
  let pad = " ".repeat(6usize.saturating_sub(level.tag().len()));
  message.lines().map(|line| format!("{tag}{pad}{line}")).collect()
}

/// Write a status line to stderr
pub fn emit(level: Level, message: &str) {
  for line in format_lines(level, message) {
    eprintln!("{line}");
  }
}

pub fn info(message: &str) {
  emit(Level::Info, message);
}

pub fn warn(message: &str) {
  emit(Level::Warn, message);
}

pub fn error(message: &str) {
  emit(Level::Error, message);
}

pub fn success(message: &str) {
  emit(Level::Success, message);
}

/// Inline notice for input the user needs to fix
pub fn notice(message: &str) {
  emit(Level::Notice, message);
}

#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => {
    $crate::info(&format!($($arg)*))
  };
}

#[macro_export]
macro_rules! warn {
  ($($arg:tt)*) => {
    $crate::warn(&format!($($arg)*))
  };
}

#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => {
    $crate::error(&format!($($arg)*))
  };
}

#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => {
    $crate::success(&format!($($arg)*))
  };
}

#[macro_export]
macro_rules! notice {
  ($($arg:tt)*) => {
    $crate::notice(&format!($($arg)*))
  };
}
