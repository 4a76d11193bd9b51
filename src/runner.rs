//! Substitution Runner
//!
//! Reads one file, applies every rule to the whole buffer in order, and
//! writes the result back once at the end. Nothing is written until all rules
//! have run, so an error before the write leaves the file as it was.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{RewriteError, Stage};
use crate::rules::RuleSet;

/// How the rewritten text reaches the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate and write in place
    #[default]
    Overwrite,
    /// Write a sibling temp file, then rename it over the target
    Atomic,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub write_mode: WriteMode,
    /// Compute everything but leave the file alone
    pub dry_run: bool,
}

/// Match count for one rule in one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub index: usize,
    pub pattern: String,
    pub matches: usize,
}

/// Result of applying a rule set to a buffer
#[derive(Debug, Clone)]
pub struct Substitution {
    pub content: String,
    pub outcomes: Vec<RuleOutcome>,
}

impl Substitution {
    pub fn total_matches(&self) -> usize {
        self.outcomes.iter().map(|o| o.matches).sum()
    }

    /// Rules that matched nothing. Not an error, just a no-op.
    pub fn unmatched(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| o.matches == 0)
    }
}

/// Outcome of a full run over a file
#[derive(Debug, Clone)]
pub struct RunReport {
    pub path: PathBuf,
    pub original: String,
    pub substitution: Substitution,
    pub written: bool,
}

impl RunReport {
    pub fn rewritten(&self) -> &str {
        &self.substitution.content
    }

    pub fn changed(&self) -> bool {
        self.original != self.substitution.content
    }
}

/// Apply each rule, in order, to every non-overlapping match of the current text
pub fn apply_rules(rules: &RuleSet, text: &str) -> Substitution {
    let mut content = text.to_string();
    let mut outcomes = Vec::with_capacity(rules.len());

    for (index, rule) in rules.iter().enumerate() {
        let matches = rule.regex.find_iter(&content).count();
        if matches > 0 {
            content = rule
                .regex
                .replace_all(&content, rule.replacement.as_str())
                .into_owned();
        }
        outcomes.push(RuleOutcome {
            index,
            pattern: rule.pattern().to_string(),
            matches,
        });
    }

    Substitution { content, outcomes }
}

/// Rewrite `path` in place with `rules`
pub fn run(path: &Path, rules: &RuleSet, options: RunOptions) -> Result<RunReport, RewriteError> {
    let original = read_source(path)?;
    let substitution = apply_rules(rules, &original);

    eprintln!(
        "[REWRITE] {} rules, {} replacements in {}",
        rules.len(),
        substitution.total_matches(),
        path.display()
    );

    let written = if options.dry_run {
        false
    } else {
        write_target(path, &substitution.content, options.write_mode)?;
        true
    };

    Ok(RunReport {
        path: path.to_path_buf(),
        original,
        substitution,
        written,
    })
}

/// Read the whole file and require valid UTF-8
pub fn read_source(path: &Path) -> Result<String, RewriteError> {
    let bytes = fs::read(path).map_err(|e| RewriteError::from_io(Stage::Read, path, e))?;
    String::from_utf8(bytes).map_err(|error| RewriteError::Encoding {
        path: path.to_path_buf(),
        error,
    })
}

pub fn write_target(path: &Path, content: &str, mode: WriteMode) -> Result<(), RewriteError> {
    match mode {
        WriteMode::Overwrite => {
            fs::write(path, content).map_err(|e| RewriteError::from_io(Stage::Write, path, e))
        }
        WriteMode::Atomic => write_atomic(path, content),
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<(), RewriteError> {
    let to_error = |e: std::io::Error| RewriteError::from_io(Stage::Write, path, e);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(to_error)?;
    temp.write_all(content.as_bytes()).map_err(to_error)?;
    temp.as_file().sync_all().map_err(to_error)?;

    // Keep the target's permissions when replacing it
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(to_error)?;
    }

    temp.persist(path).map_err(|e| to_error(e.error))?;
    Ok(())
}
