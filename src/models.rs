//! Shared data models for review outcomes.

use serde::Serialize;

#[derive(Serialize)]
/// The three review counters used by the report summary and printers.
pub struct Summary {
    pub checked: usize,
    pub flagged: usize,
    pub issues: usize,
}

#[derive(Serialize)]
/// A flagged file with its combined linter output lines.
pub struct FlaggedFile {
    /// Path relative to the repo root.
    pub file: String,
    /// Issue lines in linter order: flake8 first, then pylint.
    pub issues: Vec<String>,
    /// Where the flagged copy was written.
    pub copy: String,
}

#[derive(Serialize)]
/// Review results container.
pub struct ReviewOutcome {
    /// Path of the markdown report written for this run.
    pub report: String,
    pub flagged: Vec<FlaggedFile>,
    pub summary: Summary,
}
