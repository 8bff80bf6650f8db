//! Output rendering for the review command.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-file fields and a top-level summary.

use crate::models::ReviewOutcome;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print review results in the requested format.
pub fn print_review(out: &ReviewOutcome, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_review_json(out)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for f in &out.flagged {
                if color {
                    println!(
                        "{} {} ({} issues)",
                        "⚠ flagged:".yellow().bold(),
                        f.file.clone().bold(),
                        f.issues.len()
                    );
                } else {
                    println!("⚠ flagged: {} ({} issues)", f.file, f.issues.len());
                }
            }
            let summary = format!(
                "— Summary — checked={} flagged={} issues={}",
                out.summary.checked, out.summary.flagged, out.summary.issues
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
            println!("✅ Detailed review completed. Report saved to {}", out.report);
        }
    }
}

/// Compose review JSON object (pure) for testing/snapshot purposes.
pub fn compose_review_json(out: &ReviewOutcome) -> JsonVal {
    // Directly serialize ReviewOutcome as JSON, keeping stable shape
    serde_json::to_value(out).unwrap()
}
