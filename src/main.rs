//! i18n-rewrite CLI entry point.

use clap::Parser;
use i18n_rewrite::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute(&cli) {
        eprintln!("error: [{}] {}", e.stage(), e);
        std::process::exit(1);
    }
}
