//! Rule Types
//!
//! A rule pairs a regex with the replacement text that should take the place
//! of every match. Rules only make sense as an ordered sequence: a later rule
//! sees the text produced by the earlier ones.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::RewriteError;

/// A single (pattern, replacement) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    /// Regular expression matched against the whole buffer
    pub pattern: String,
    /// Replacement template; `$1` / `${name}` expand capture groups, `$$` is a literal `$`
    pub replacement: String,
}

impl ReplacementRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// A rule whose pattern has been compiled
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub regex: Regex,
    pub replacement: String,
}

impl CompiledRule {
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Ordered, immutable sequence of compiled rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile every pattern up front.
    /// Fails on the first invalid pattern, before any text is touched.
    pub fn compile(rules: &[ReplacementRule]) -> Result<Self, RewriteError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for (index, rule) in rules.iter().enumerate() {
            let regex = Regex::new(&rule.pattern).map_err(|error| RewriteError::Pattern {
                index,
                pattern: rule.pattern.clone(),
                error,
            })?;
            compiled.push(CompiledRule {
                regex,
                replacement: rule.replacement.clone(),
            });
        }
        Ok(Self { rules: compiled })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledRule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a CompiledRule;
    type IntoIter = std::slice::Iter<'a, CompiledRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_keeps_order() {
        let rules = vec![
            ReplacementRule::new("'a'", "A"),
            ReplacementRule::new("'b'", "B"),
        ];
        let set = RuleSet::compile(&rules).unwrap();
        let patterns: Vec<&str> = set.iter().map(|r| r.pattern()).collect();
        assert_eq!(patterns, vec!["'a'", "'b'"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_compile_reports_first_invalid_rule() {
        let rules = vec![
            ReplacementRule::new("'ok'", "fine"),
            ReplacementRule::new("'broken(", "never"),
            ReplacementRule::new("[also broken", "never"),
        ];
        let err = RuleSet::compile(&rules).unwrap_err();
        assert_eq!(err.rule_index(), Some(1));
    }

    #[test]
    fn test_empty_rule_set() {
        let set = RuleSet::compile(&[]).unwrap();
        assert!(set.is_empty());
    }
}
