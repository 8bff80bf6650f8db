//! pyrev CLI binary entry point.
//! Delegates to the review module and prints results.

mod cli;
mod config;
mod linters;
mod models;
mod output;
mod report;
mod review;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Review {
            repo_root,
            output,
            reports_dir,
            flagged_dir,
        } => {
            let eff = match config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                reports_dir.as_deref(),
                flagged_dir.as_deref(),
            ) {
                Ok(eff) => eff,
                Err(e) => {
                    eprintln!("{} {:#}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            // Friendly note if no pyrev config was found
            if matches!(config::load_config(&eff.repo_root), Ok(None)) && eff.output != "json" {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No pyrev.toml found; using defaults."
                );
            }
            match review::run_review(&eff) {
                Ok(out) => output::print_review(&out, &eff.output),
                Err(e) => {
                    eprintln!("{} {:#}", utils::error_prefix(), e);
                    std::process::exit(1);
                }
            }
        }
    }
}
