//! Command-line interface for i18n-rewrite.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{resolve_rules, save_rules_config, RulesConfig};
use crate::diff::unified_diff;
use crate::error::RewriteError;
use crate::rules::{builtin_rules, RuleSet};
use crate::runner::{run, RunOptions, RunReport, WriteMode};

const DIFF_CONTEXT: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "i18n-rewrite")]
#[command(about = "Replace hardcoded UI strings with window.i18n.t() lookups", long_about = None)]
pub struct Cli {
    /// Source file to rewrite in place
    #[arg(required_unless_present = "export_rules")]
    pub file: Option<PathBuf>,

    /// JSON rule file to use instead of the built-in table
    #[arg(long, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Print a diff instead of writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Write through a temp file and rename it over the target
    #[arg(long)]
    pub atomic: bool,

    /// Print the match count of every rule
    #[arg(long)]
    pub report: bool,

    /// Write the built-in table to PATH as a rule file and exit
    #[arg(long, value_name = "PATH", conflicts_with_all = ["rules", "dry_run", "atomic", "report"])]
    pub export_rules: Option<PathBuf>,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            write_mode: if self.atomic {
                WriteMode::Atomic
            } else {
                WriteMode::Overwrite
            },
            dry_run: self.dry_run,
        }
    }
}

/// Run the command described by `cli`
pub fn execute(cli: &Cli) -> Result<(), RewriteError> {
    match (&cli.export_rules, cli.file.as_deref()) {
        (Some(path), _) => export_builtin(path),
        (None, Some(file)) => rewrite(cli, file),
        (None, None) => unreachable!("clap requires FILE unless --export-rules is given"),
    }
}

fn rewrite(cli: &Cli, file: &Path) -> Result<(), RewriteError> {
    let rules = resolve_rules(cli.rules.as_deref())?;
    let rule_set = RuleSet::compile(&rules)?;
    let report = run(file, &rule_set, cli.run_options())?;

    if cli.report {
        print!("{}", format_match_report(&report));
    }

    if cli.dry_run {
        print!("{}", format_dry_run(&report));
    } else {
        println!("Replacement complete: {}", file.display());
    }

    Ok(())
}

fn export_builtin(path: &Path) -> Result<(), RewriteError> {
    let cfg = RulesConfig {
        include_builtin: false,
        rules: builtin_rules(),
    };
    save_rules_config(path, &cfg)?;
    println!("Wrote {} rules to {}", cfg.rules.len(), path.display());
    Ok(())
}

/// One line per rule (index, matches, pattern) plus an unmatched summary
pub fn format_match_report(report: &RunReport) -> String {
    let mut out = String::new();
    for outcome in &report.substitution.outcomes {
        out.push_str(&format!(
            "{:>4}  {:>3}  {}\n",
            outcome.index, outcome.matches, outcome.pattern
        ));
    }
    out.push_str(&format!(
        "{} of {} rules matched nothing\n",
        report.substitution.unmatched().count(),
        report.substitution.outcomes.len()
    ));
    out
}

pub fn format_dry_run(report: &RunReport) -> String {
    let label = report.path.to_string_lossy();
    let diff = unified_diff(&label, &report.original, report.rewritten(), DIFF_CONTEXT);
    if diff.is_empty() {
        format!("No changes for {}\n", report.path.display())
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_rules_config;
    use std::ffi::OsStr;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&OsStr]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_file_is_required() {
        assert!(Cli::try_parse_from(["i18n-rewrite"]).is_err());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "i18n-rewrite",
            "src/main.js",
            "--dry-run",
            "--atomic",
            "--rules",
            "rules.json",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("src/main.js")));
        assert_eq!(cli.rules, Some(PathBuf::from("rules.json")));
        let options = cli.run_options();
        assert!(options.dry_run);
        assert_eq!(options.write_mode, WriteMode::Atomic);
    }

    #[test]
    fn test_export_rules_without_file() {
        let cli = Cli::try_parse_from(["i18n-rewrite", "--export-rules", "out.json"]).unwrap();
        assert!(cli.file.is_none());
        assert!(Cli::try_parse_from([
            "i18n-rewrite",
            "--export-rules",
            "out.json",
            "--dry-run"
        ])
        .is_err());
    }

    #[test]
    fn test_execute_with_rule_file() {
        let temp = tempdir().unwrap();
        let rules_path = temp.path().join("rules.json");
        let source_path = temp.path().join("main.js");
        fs::write(
            &rules_path,
            r#"{ "rules": [ { "pattern": "'保存'", "replacement": "window.i18n.t('button.save')" } ] }"#,
        )
        .unwrap();
        fs::write(&source_path, "btn.textContent = '保存';\n").unwrap();

        let cli = parse(&[
            OsStr::new("i18n-rewrite"),
            source_path.as_os_str(),
            OsStr::new("--rules"),
            rules_path.as_os_str(),
        ]);
        execute(&cli).unwrap();

        assert_eq!(
            fs::read_to_string(&source_path).unwrap(),
            "btn.textContent = window.i18n.t('button.save');\n"
        );
    }

    #[test]
    fn test_execute_bad_pattern_leaves_file_untouched() {
        let temp = tempdir().unwrap();
        let rules_path = temp.path().join("rules.json");
        let source_path = temp.path().join("main.js");
        fs::write(
            &rules_path,
            r#"{ "include_builtin": true, "rules": [ { "pattern": "'(unclosed'", "replacement": "x" } ] }"#,
        )
        .unwrap();
        fs::write(&source_path, "showError('找不到账号信息');\n").unwrap();

        let cli = parse(&[
            OsStr::new("i18n-rewrite"),
            source_path.as_os_str(),
            OsStr::new("--rules"),
            rules_path.as_os_str(),
        ]);
        let err = execute(&cli).unwrap_err();

        assert_eq!(err.rule_index(), Some(builtin_rules().len()));
        assert_eq!(
            fs::read_to_string(&source_path).unwrap(),
            "showError('找不到账号信息');\n"
        );
    }

    #[test]
    fn test_export_then_reload() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("rules.json");

        let cli = parse(&[
            OsStr::new("i18n-rewrite"),
            OsStr::new("--export-rules"),
            out.as_os_str(),
        ]);
        execute(&cli).unwrap();

        let cfg = load_rules_config(&out).unwrap();
        assert!(!cfg.include_builtin);
        assert_eq!(cfg.rules, builtin_rules());
    }

    #[test]
    fn test_execute_dry_run_leaves_file_untouched() {
        let temp = tempdir().unwrap();
        let source_path = temp.path().join("main.js");
        let rules_path = temp.path().join("rules.json");
        fs::write(&rules_path, r#"{ "include_builtin": true }"#).unwrap();
        fs::write(&source_path, "showError('找不到账号信息');\n").unwrap();

        let cli = parse(&[
            OsStr::new("i18n-rewrite"),
            source_path.as_os_str(),
            OsStr::new("--rules"),
            rules_path.as_os_str(),
            OsStr::new("--dry-run"),
            OsStr::new("--report"),
        ]);
        execute(&cli).unwrap();

        assert_eq!(
            fs::read_to_string(&source_path).unwrap(),
            "showError('找不到账号信息');\n"
        );
    }

    #[test]
    fn test_format_dry_run() {
        let temp = tempdir().unwrap();
        let source_path = temp.path().join("main.js");
        fs::write(&source_path, "a('更新');\nb();\n").unwrap();
        let rules = RuleSet::compile(&builtin_rules()).unwrap();
        let options = RunOptions {
            dry_run: true,
            ..RunOptions::default()
        };

        let report = run(&source_path, &rules, options).unwrap();
        let out = format_dry_run(&report);

        assert!(out.starts_with("--- a/"));
        assert!(out.contains("-a('更新');\n+a(window.i18n.t('button.update'));\n"));

        fs::write(&source_path, "b();\n").unwrap();
        let unchanged = run(&source_path, &rules, options).unwrap();
        assert!(format_dry_run(&unchanged).starts_with("No changes for "));
    }

    #[test]
    fn test_format_match_report() {
        let temp = tempdir().unwrap();
        let source_path = temp.path().join("main.js");
        fs::write(&source_path, "x('更新'); y('更新');\n").unwrap();
        let rules = RuleSet::compile(&builtin_rules()).unwrap();
        let total = rules.len();

        let report = run(&source_path, &rules, RunOptions::default()).unwrap();
        let out = format_match_report(&report);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), total + 1);
        assert_eq!(lines[total - 1], format!("{:>4}  {:>3}  '更新'", total - 1, 2));
        assert_eq!(
            lines[total],
            format!("{} of {} rules matched nothing", total - 1, total)
        );
    }
}
