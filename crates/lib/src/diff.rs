//! Human-readable diff of two landmine markers.

use std::time::SystemTime;

use diffy::DiffOptions;

const OLD_LABEL: &str = "old_landmines";
const NEW_LABEL: &str = "new_landmines";

/// Unified diff from `old` to `new` with no context lines.
///
/// The header carries the file labels and, when known, the time each side was
/// recorded. Returns an empty string when the texts are identical.
pub fn landmine_diff(old: &str, new: &str, old_time: Option<SystemTime>, new_time: SystemTime) -> String {
  if old == new {
    return String::new();
  }

  let mut options = DiffOptions::new();
  options.set_context_len(0);
  let patch = options.create_patch(old, new).to_string();

  let mut out = String::with_capacity(patch.len() + 96);
  out.push_str(&header_line("---", OLD_LABEL, old_time));
  out.push_str(&header_line("+++", NEW_LABEL, Some(new_time)));
  // diffy writes its own two-line header first; everything after it is hunks
  for line in patch.split_inclusive('\n').skip(2) {
    out.push_str(line);
  }
  if !out.ends_with('\n') {
    out.push('\n');
  }
  out
}

fn header_line(prefix: &str, label: &str, time: Option<SystemTime>) -> String {
  match time {
    Some(time) => format!("{} {}\t{}\n", prefix, label, humantime::format_rfc3339_seconds(time)),
    None => format!("{} {}\n", prefix, label),
  }
}
