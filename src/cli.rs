//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pyrev",
    version,
    about = "pyrev — flake8/pylint review aggregator",
    long_about = "pyrev — walk a Python source tree, run flake8 and pylint on every file,\nand collect their findings into a timestamped markdown report.\n\nConfiguration precedence: CLI > pyrev.toml > defaults.",
    after_help = "Examples:\n  pyrev review\n  pyrev review --repo-root ../service --output json\n  pyrev review --reports-dir out/reports --flagged-dir out/flagged",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current pyrev version."
    )]
    Version,
    /// Review a Python source tree
    #[command(
        about = "Run a review pass",
        long_about = "Walk the tree, lint every .py file with flake8 and pylint, write a\ntimestamped markdown report, and copy flagged files aside for inspection.",
        after_help = "Examples:\n  pyrev review\n  pyrev review --output json"
    )]
    Review {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Directory for markdown reports (default: review_reports)")]
        reports_dir: Option<String>,
        #[arg(long, help = "Directory for flagged file copies (default: flagged_code)")]
        flagged_dir: Option<String>,
    },
}
