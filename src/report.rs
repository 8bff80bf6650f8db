//! Markdown report rendering.
//!
//! The writer holds the report handle open for the whole run and streams one
//! section per flagged file, so sections land in traversal order and an
//! interrupted run still leaves a valid report prefix on disk.

use anyhow::Result;
use std::io::Write;

use crate::models::Summary;

/// Derive the report file name for a run timestamp.
pub fn report_filename(timestamp: &str) -> String {
    format!("{}_review.md", timestamp)
}

/// Streaming markdown writer for one review run.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    /// Open the report by writing the title line.
    pub fn new(mut out: W, timestamp: &str) -> Result<Self> {
        writeln!(out, "# 🔍 Code Review Report – {}\n", timestamp)?;
        Ok(ReportWriter { out })
    }

    /// Append a section for one flagged file: heading, sub-heading, and a
    /// literal text block with one issue per line.
    pub fn write_file_section(&mut self, relpath: &str, issues: &[String]) -> Result<()> {
        writeln!(self.out, "## 📄 {}\n", relpath)?;
        writeln!(self.out, "### Flake8 + Pylint Warnings:")?;
        writeln!(self.out, "```text")?;
        for issue in issues {
            writeln!(self.out, "{}", issue)?;
        }
        writeln!(self.out, "```\n")?;
        Ok(())
    }

    /// Close the report with the three labelled counters.
    pub fn write_summary(&mut self, summary: &Summary) -> Result<()> {
        writeln!(self.out, "---\n")?;
        writeln!(self.out, "✅ **Review Summary:**")?;
        writeln!(self.out, "- Total Python files checked: `{}`", summary.checked)?;
        writeln!(self.out, "- Files with issues: `{}`", summary.flagged)?;
        writeln!(self.out, "- Total issues found: `{}`", summary.issues)?;
        Ok(())
    }
}
