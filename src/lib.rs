pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod rules;
pub mod runner;

pub use error::{RewriteError, Stage};
pub use rules::{builtin_rules, ReplacementRule, RuleSet};
pub use runner::{apply_rules, run, RunOptions, RunReport, Substitution, WriteMode};
