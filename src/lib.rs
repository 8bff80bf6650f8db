//! pyrev core library.
//!
//! This crate exposes programmatic APIs for reviewing a Python source tree:
//! every `.py` file is linted with flake8 and pylint, their combined output
//! is aggregated into a timestamped markdown report, and flagged files are
//! copied aside for inspection.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `review`: The review pass: traversal, linting, report, flagged copies.
//! - `linters`: flake8/pylint subprocess invocation.
//! - `report`: Streaming markdown report writer.
//! - `models`: Data models for review outcomes.
//! - `output`: Human/JSON printers for review results.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod linters;
pub mod models;
pub mod output;
pub mod report;
pub mod review;
pub mod utils;
