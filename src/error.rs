//! Rewrite Errors
//!
//! Every failure is fatal. Each error knows the stage it happened in so the
//! CLI can say whether the target file was touched.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Pipeline stage an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Compile,
    Read,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Config => "config",
            Stage::Compile => "compile",
            Stage::Read => "read",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

/// Errors raised while loading rules or rewriting a file
#[derive(Debug)]
pub enum RewriteError {
    FileNotFound(PathBuf),
    AccessDenied {
        path: PathBuf,
        stage: Stage,
    },
    Encoding {
        path: PathBuf,
        error: std::string::FromUtf8Error,
    },
    Pattern {
        index: usize,
        pattern: String,
        error: regex::Error,
    },
    Io {
        stage: Stage,
        path: PathBuf,
        error: io::Error,
    },
    Config {
        path: PathBuf,
        message: String,
    },
}

impl RewriteError {
    /// Classify an I/O error raised while touching `path` during `stage`
    pub fn from_io(stage: Stage, path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound if stage == Stage::Read => {
                RewriteError::FileNotFound(path.to_path_buf())
            }
            io::ErrorKind::PermissionDenied => RewriteError::AccessDenied {
                path: path.to_path_buf(),
                stage,
            },
            _ => RewriteError::Io {
                stage,
                path: path.to_path_buf(),
                error,
            },
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            RewriteError::FileNotFound(_) => Stage::Read,
            RewriteError::AccessDenied { stage, .. } => *stage,
            RewriteError::Encoding { .. } => Stage::Read,
            RewriteError::Pattern { .. } => Stage::Compile,
            RewriteError::Io { stage, .. } => *stage,
            RewriteError::Config { .. } => Stage::Config,
        }
    }

    /// Index of the offending rule, for pattern errors
    pub fn rule_index(&self) -> Option<usize> {
        match self {
            RewriteError::Pattern { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::FileNotFound(p) => write!(f, "File not found: {}", p.display()),
            RewriteError::AccessDenied { path, stage } => {
                write!(f, "Access denied during {}: {}", stage, path.display())
            }
            RewriteError::Encoding { path, error } => {
                write!(f, "{} is not valid UTF-8: {}", path.display(), error)
            }
            RewriteError::Pattern {
                index,
                pattern,
                error,
            } => write!(f, "Rule #{} has an invalid pattern {:?}: {}", index, pattern, error),
            RewriteError::Io { stage, path, error } => {
                write!(f, "IO error during {} of {}: {}", stage, path.display(), error)
            }
            RewriteError::Config { path, message } => {
                write!(f, "Invalid rule file {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for RewriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RewriteError::Encoding { error, .. } => Some(error),
            RewriteError::Pattern { error, .. } => Some(error),
            RewriteError::Io { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_classification() {
        let path = Path::new("/tmp/main.js");

        let not_found = RewriteError::from_io(
            Stage::Read,
            path,
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(not_found, RewriteError::FileNotFound(_)));
        assert_eq!(not_found.stage(), Stage::Read);

        let denied = RewriteError::from_io(
            Stage::Write,
            path,
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(matches!(denied, RewriteError::AccessDenied { .. }));
        assert_eq!(denied.stage(), Stage::Write);

        let other = RewriteError::from_io(
            Stage::Write,
            path,
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        assert!(matches!(other, RewriteError::Io { stage: Stage::Write, .. }));
    }

    #[test]
    fn test_pattern_error_reports_index() {
        let error = regex::Regex::new("(").unwrap_err();
        let err = RewriteError::Pattern {
            index: 7,
            pattern: "(".to_string(),
            error,
        };
        assert_eq!(err.rule_index(), Some(7));
        assert_eq!(err.stage(), Stage::Compile);
        assert!(err.to_string().starts_with("Rule #7"));
    }
}
