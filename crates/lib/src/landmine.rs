//! Landmine sets and their on-disk text form.

use std::fmt;

use serde::Serialize;

/// An ordered list of landmine lines for one build invocation.
///
/// Lines are stored trimmed and without their newline. Comparison is exact
/// and order-sensitive: the same lines in a different order are a different
/// set and will trip a clobber.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LandmineSet {
  lines: Vec<String>,
}

impl LandmineSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a set from raw provider lines, trimming each one.
  pub fn from_lines<I, S>(lines: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut set = Self::new();
    set.extend(lines);
    set
  }

  /// Append raw provider lines after the existing ones, trimming each one.
  pub fn extend<I, S>(&mut self, lines: I)
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    self
      .lines
      .extend(lines.into_iter().map(|line| line.as_ref().trim().to_string()));
  }

  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Marker file contents: every line followed by exactly one `\n`.
  pub fn render(&self) -> String {
    let capacity = self.lines.iter().map(|l| l.len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for line in &self.lines {
      out.push_str(line);
      out.push('\n');
    }
    out
  }
}

impl fmt::Display for LandmineSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.render())
  }
}
