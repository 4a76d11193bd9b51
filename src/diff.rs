//! Diff Preview
//!
//! Unified diff used by `--dry-run` to show what a rewrite would change
//! without touching the file.

use similar::TextDiff;

/// Render a unified diff with `a/`/`b/` file headers. Empty when nothing changed.
pub fn unified_diff(label: &str, old: &str, new: &str, context: usize) -> String {
    if old == new {
        return String::new();
    }
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(context)
        .header(&format!("a/{label}"), &format!("b/{label}"))
        .to_string()
}
