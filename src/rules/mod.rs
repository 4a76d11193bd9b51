//! Replacement Rules
//!
//! Ordered regex rules that turn hardcoded UI strings into i18n lookups.
//!
//! - `ReplacementRule`: plain (pattern, replacement) data, loadable from JSON
//! - `RuleSet`: the compiled, immutable sequence handed to the runner
//! - `builtin_rules`: the table shipped with the tool

mod rule;
mod table;

pub use rule::{CompiledRule, ReplacementRule, RuleSet};
pub use table::builtin_rules;
