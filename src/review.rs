//! The review pass: traversal, per-file linting, report, flagged copies.
//!
//! One strictly sequential pass. Each file is fully processed (both linters,
//! report section, optional copy) before the next one starts, and the report
//! handle stays open across the run so sections appear in traversal order.

use anyhow::{Context, Result};
use chrono::Local;
use glob::{glob, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Effective;
use crate::linters;
use crate::models::{FlaggedFile, ReviewOutcome, Summary};
use crate::report::{report_filename, ReportWriter};

/// Run one review pass over `eff.repo_root`.
///
/// Creates the output directories, lints every eligible `.py` file with
/// flake8 and pylint, streams a markdown report, and mirrors flagged files
/// into the flagged-copies directory. Any linter spawn failure or I/O error
/// aborts the run; linter exit codes are never treated as failures.
pub fn run_review(eff: &Effective) -> Result<ReviewOutcome> {
    let reports_root = eff.repo_root.join(&eff.reports_dir);
    let flagged_root = eff.repo_root.join(&eff.flagged_dir);
    fs::create_dir_all(&reports_root)
        .with_context(|| format!("cannot create {}", reports_root.to_string_lossy()))?;
    fs::create_dir_all(&flagged_root)
        .with_context(|| format!("cannot create {}", flagged_root.to_string_lossy()))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let report_path = reports_root.join(report_filename(&timestamp));

    let excluded = excluded_roots(eff, &reports_root, &flagged_root);
    let targets = eligible_files(&eff.repo_root, &excluded)?;

    let report_file = fs::File::create(&report_path)
        .with_context(|| format!("cannot create {}", report_path.to_string_lossy()))?;
    let mut report = ReportWriter::new(report_file, &timestamp)?;

    let mut flagged: Vec<FlaggedFile> = Vec::new();
    let mut checked: usize = 0;
    let mut issues_total: usize = 0;

    for path in targets {
        checked += 1;
        let mut all_issues = linters::run_flake8(&eff.flake8, &path)?;
        all_issues.extend(linters::run_pylint(&eff.pylint, &path)?);
        if all_issues.is_empty() {
            continue;
        }
        issues_total += all_issues.len();

        let relpath = pathdiff::diff_paths(&path, &eff.repo_root)
            .unwrap_or_else(|| path.clone())
            .to_string_lossy()
            .to_string();
        report.write_file_section(&relpath, &all_issues)?;

        let copy_path = flagged_copy_path(&flagged_root, &path);
        fs::copy(&path, &copy_path)
            .with_context(|| format!("cannot copy flagged file to {}", copy_path.to_string_lossy()))?;

        flagged.push(FlaggedFile {
            file: relpath,
            issues: all_issues,
            copy: copy_path.to_string_lossy().to_string(),
        });
    }

    let summary = Summary {
        checked,
        flagged: flagged.len(),
        issues: issues_total,
    };
    report.write_summary(&summary)?;

    Ok(ReviewOutcome {
        report: report_path.to_string_lossy().to_string(),
        flagged,
        summary,
    })
}

/// Canonical roots whose contents are never eligible: the two output
/// directories plus any configured excludes. Excludes that do not exist
/// (or cannot be resolved) are skipped.
fn excluded_roots(eff: &Effective, reports_root: &Path, flagged_root: &Path) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = Vec::new();
    for p in [reports_root, flagged_root] {
        if let Ok(c) = p.canonicalize() {
            roots.push(c);
        }
    }
    for name in &eff.exclude {
        if let Ok(c) = eff.repo_root.join(name).canonicalize() {
            roots.push(c);
        }
    }
    roots
}

/// Recursively collect every `.py` regular file under `root`, skipping
/// anything below an excluded root. Comparison is by canonical path, so the
/// exclusion holds however the traversal root was spelled.
fn eligible_files(root: &Path, excluded: &[PathBuf]) -> Result<Vec<PathBuf>> {
    // The root is a literal path, not pattern syntax: escape it so glob
    // metacharacters in directory names ([, ], *, ?) do not empty the walk.
    let pattern = format!("{}/**/*.py", Pattern::escape(&root.to_string_lossy()));
    let mut targets: Vec<PathBuf> = Vec::new();
    for entry in glob(&pattern).context("bad traversal pattern")? {
        let path = match entry {
            Ok(p) => p,
            Err(_) => continue,
        };
        if !path.is_file() {
            continue;
        }
        let canon = match path.canonicalize() {
            Ok(c) => c,
            Err(_) => continue,
        };
        if excluded.iter().any(|ex| canon.starts_with(ex)) {
            continue;
        }
        targets.push(path);
    }
    Ok(targets)
}

/// Derive the flat flagged-copy path: `<stem>_flagged.py`. Files with equal
/// stems in different directories collide and the later one wins.
fn flagged_copy_path(flagged_root: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    flagged_root.join(format!("{}_flagged.py", stem))
}
