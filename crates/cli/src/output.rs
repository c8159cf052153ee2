//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! messages, colored diffs, and JSON output.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  println!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stdout, |s| s.yellow()),
    message.if_supports_color(Stream::Stdout, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLine {
  Header,
  Hunk,
  Removed,
  Added,
  Other,
}

pub fn classify_diff_line(line: &str) -> DiffLine {
  if line.starts_with("--- ") || line.starts_with("+++ ") {
    DiffLine::Header
  } else if line.starts_with("@@") {
    DiffLine::Hunk
  } else if line.starts_with('-') {
    DiffLine::Removed
  } else if line.starts_with('+') {
    DiffLine::Added
  } else {
    DiffLine::Other
  }
}

/// Print a unified diff, coloring removals and additions when supported.
pub fn print_diff(diff: &str) {
  for (index, line) in diff.lines().enumerate() {
    // Only the first two lines are file headers; later `---` lines are removals
    let kind = match classify_diff_line(line) {
      DiffLine::Header if index >= 2 => {
        if line.starts_with('-') {
          DiffLine::Removed
        } else {
          DiffLine::Added
        }
      }
      kind => kind,
    };
    match kind {
      DiffLine::Header => println!("{}", line.if_supports_color(Stream::Stdout, |s| s.bold())),
      DiffLine::Hunk => println!("{}", line.if_supports_color(Stream::Stdout, |s| s.cyan())),
      DiffLine::Removed => println!("{}", line.if_supports_color(Stream::Stdout, |s| s.red())),
      DiffLine::Added => println!("{}", line.if_supports_color(Stream::Stdout, |s| s.green())),
      DiffLine::Other => println!("{}", line),
    }
  }
}
