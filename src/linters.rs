//! External linter invocation.
//!
//! flake8 and pylint are opaque collaborators: each is spawned once per file
//! and its stdout is split into free-text issue lines. A non-zero exit code
//! means the linter found issues, never a failure. A spawn error (typically
//! the executable missing from PATH) is fatal and aborts the whole run.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Run flake8 against a single file and return its issue lines.
pub fn run_flake8(program: &str, filepath: &Path) -> Result<Vec<String>> {
    let out = Command::new(program)
        .arg(filepath)
        .output()
        .with_context(|| format!("failed to run '{}' (is flake8 installed?)", program))?;
    Ok(split_issue_lines(&out.stdout))
}

/// Run pylint against a single file and return its issue lines.
///
/// Refactor (R) and convention (C) categories are disabled and the score
/// footer is suppressed, leaving only warning/error lines on stdout.
pub fn run_pylint(program: &str, filepath: &Path) -> Result<Vec<String>> {
    let out = Command::new(program)
        .arg(filepath)
        .args(["--disable=R,C", "--score=n"])
        .output()
        .with_context(|| format!("failed to run '{}' (is pylint installed?)", program))?;
    Ok(split_issue_lines(&out.stdout))
}

/// Trim the whole captured output, then split into lines.
///
/// Trimming first means an all-whitespace output yields no lines at all,
/// so a quiet linter never flags a file.
fn split_issue_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .trim()
        .lines()
        .map(|l| l.to_string())
        .collect()
}
