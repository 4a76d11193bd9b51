use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::RewriteError;
use crate::rules::{builtin_rules, ReplacementRule};

/// Rule file contents (`rules.json`)
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Run the built-in table before the rules listed here
    #[serde(default)]
    pub include_builtin: bool,
    #[serde(default)]
    pub rules: Vec<ReplacementRule>,
}

impl RulesConfig {
    /// Flatten into the ordered rule list the runner applies
    pub fn into_rules(self) -> Vec<ReplacementRule> {
        if self.include_builtin {
            let mut rules = builtin_rules();
            rules.extend(self.rules);
            rules
        } else {
            self.rules
        }
    }
}

pub fn default_rules_path() -> PathBuf {
    let Some(dirs) = ProjectDirs::from("com", "zaguan", "i18n-rewrite") else {
        return Path::new("i18n-rewrite-rules.json").to_path_buf();
    };
    dirs.config_dir().join("rules.json")
}

pub fn load_rules_config(path: &Path) -> Result<RulesConfig, RewriteError> {
    let bytes = fs::read(path).map_err(|e| RewriteError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_slice::<RulesConfig>(&bytes).map_err(|e| RewriteError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn save_rules_config(path: &Path, cfg: &RulesConfig) -> Result<(), RewriteError> {
    let to_config_error = |message: String| RewriteError::Config {
        path: path.to_path_buf(),
        message,
    };
    let json = serde_json::to_vec_pretty(cfg).map_err(|e| to_config_error(e.to_string()))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| to_config_error(e.to_string()))?;
    }
    fs::write(path, json).map_err(|e| to_config_error(e.to_string()))
}

/// Pick the rule list for a run.
///
/// An explicit path must load. Otherwise the default location is used when a
/// file exists there, and the built-in table when it doesn't.
pub fn resolve_rules(explicit: Option<&Path>) -> Result<Vec<ReplacementRule>, RewriteError> {
    resolve_rules_with_default(explicit, &default_rules_path())
}

fn resolve_rules_with_default(
    explicit: Option<&Path>,
    default_path: &Path,
) -> Result<Vec<ReplacementRule>, RewriteError> {
    if let Some(path) = explicit {
        eprintln!("[CONFIG] Loading rules from {}", path.display());
        return Ok(load_rules_config(path)?.into_rules());
    }

    if default_path.is_file() {
        eprintln!("[CONFIG] Loading rules from {}", default_path.display());
        let cfg = load_rules_config(default_path)?;
        if !cfg.include_builtin {
            eprintln!(
                "[CONFIG] {} has include_builtin = false; the built-in table is bypassed",
                default_path.display()
            );
        }
        return Ok(cfg.into_rules());
    }

    Ok(builtin_rules())
}
