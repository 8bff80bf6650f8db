//! Configuration discovery and effective settings resolution.
//!
//! pyrev reads `pyrev.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `review.reports_dir`: `review_reports`
//! - `review.flagged_dir`: `flagged_code`
//! - `review.exclude`: empty
//! - `linters.flake8|pylint`: resolved from PATH by name
//!
//! Overrides precedence: CLI > config file > defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Review-related configuration section under `[review]`.
pub struct ReviewCfg {
    pub reports_dir: Option<String>,
    pub flagged_dir: Option<String>,
    /// Extra directories to skip during traversal, relative to the repo root.
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Linter executable overrides under `[linters]`.
pub struct LintersCfg {
    pub flake8: Option<String>,
    pub pylint: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `pyrev.toml|yaml`.
pub struct PyrevConfig {
    pub output: Option<String>,
    #[serde(default)]
    pub review: Option<ReviewCfg>,
    #[serde(default)]
    pub linters: Option<LintersCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub reports_dir: String,
    pub flagged_dir: String,
    pub exclude: Vec<String>,
    pub flake8: String,
    pub pylint: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `pyrev.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    // Walk up to find config or .git; else return start
    let mut cur = start;
    loop {
        if cur.join("pyrev.toml").exists()
            || cur.join("pyrev.yaml").exists()
            || cur.join("pyrev.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `PyrevConfig` from `pyrev.toml` or `pyrev.yaml|yml` if present.
///
/// An absent config is `Ok(None)`; a present-but-unreadable or malformed
/// one is an error, so a typo cannot silently fall back to defaults.
pub fn load_config(root: &Path) -> Result<Option<PyrevConfig>> {
    let toml_path = root.join("pyrev.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path)
            .with_context(|| format!("cannot read {}", toml_path.to_string_lossy()))?;
        let cfg: PyrevConfig = toml::from_str(&s)
            .with_context(|| format!("invalid config {}", toml_path.to_string_lossy()))?;
        return Ok(Some(cfg));
    }
    for yml in ["pyrev.yaml", "pyrev.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p)
                .with_context(|| format!("cannot read {}", p.to_string_lossy()))?;
            let cfg: PyrevConfig = serde_yaml::from_str(&s)
                .with_context(|| format!("invalid config {}", p.to_string_lossy()))?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_reports_dir: Option<&str>,
    cli_flagged_dir: Option<&str>,
) -> Result<Effective> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root)?.unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let reports_dir = cli_reports_dir
        .map(|s| s.to_string())
        .or_else(|| cfg.review.as_ref().and_then(|r| r.reports_dir.clone()))
        .unwrap_or_else(|| "review_reports".to_string());

    let flagged_dir = cli_flagged_dir
        .map(|s| s.to_string())
        .or_else(|| cfg.review.as_ref().and_then(|r| r.flagged_dir.clone()))
        .unwrap_or_else(|| "flagged_code".to_string());

    let exclude = cfg
        .review
        .as_ref()
        .and_then(|r| r.exclude.clone())
        .unwrap_or_default();

    let flake8 = cfg
        .linters
        .as_ref()
        .and_then(|l| l.flake8.clone())
        .unwrap_or_else(|| "flake8".to_string());
    let pylint = cfg
        .linters
        .as_ref()
        .and_then(|l| l.pylint.clone())
        .unwrap_or_else(|| "pylint".to_string());

    Ok(Effective {
        repo_root,
        output,
        reports_dir,
        flagged_dir,
        exclude,
        flake8,
        pylint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("pyrev.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
[review]
reports_dir = "out/reports"
exclude = ["agents", "vendor"]
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, None, None).unwrap();
        assert_eq!(eff.output, "json");
        assert_eq!(eff.reports_dir, "out/reports");
        assert_eq!(eff.flagged_dir, "flagged_code");
        assert_eq!(eff.exclude, vec!["agents".to_string(), "vendor".to_string()]);
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("pyrev.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output: human
review:
  flagged_dir: quarantine
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None, None).unwrap();
        assert_eq!(eff.output, "human");
        assert_eq!(eff.reports_dir, "review_reports");
        assert_eq!(eff.flagged_dir, "quarantine");
        // Linters default to PATH names when unspecified
        assert_eq!(eff.flake8, "flake8");
        assert_eq!(eff.pylint, "pylint");
    }

    #[test]
    fn test_cli_precedence_over_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("pyrev.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
[review]
reports_dir = "cfg_reports"
[linters]
flake8 = "/opt/py/bin/flake8"
            "#
        )
        .unwrap();

        // CLI output/reports_dir should take precedence over config
        let eff =
            resolve_effective(root.to_str(), Some("human"), Some("cli_reports"), None).unwrap();
        assert_eq!(eff.output, "human");
        assert_eq!(eff.reports_dir, "cli_reports");
        // Linter override only exists in config
        assert_eq!(eff.flake8, "/opt/py/bin/flake8");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("pyrev.toml"), "output = [broken\n").unwrap();

        let err = resolve_effective(root.to_str(), None, None, None).unwrap_err();
        assert!(err.to_string().contains("pyrev.toml"));
    }

    #[test]
    fn test_detect_repo_root_walks_up_to_git() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        let nested = root.join("pkg/sub");
        fs::create_dir_all(&nested).unwrap();

        let detected = detect_repo_root(&nested);
        assert_eq!(detected, root);
    }
}
