//! Verification pipeline
//!
//! Four ordered levels of checks over a plugin directory:
//! - Level 1: basic presence (plugin files, README, LICENSE, headers)
//! - Level 2: functional heuristics (error handling, logging, naming)
//! - Level 3: compatibility declarations (host version, system requirements)
//! - Level 4: performance heuristics (size budget, optimization markers)

mod levels;
mod report;
mod scoring;

pub use report::{run_verification, run_verification_with_callback, save_report, CheckSink};
pub use scoring::{determine_rating, generate_recommendations, overall_score};

/// Recognized plugin file extensions, in scan order.
pub(crate) const PLUGIN_EXTENSIONS: [&str; 5] = ["ms", "mse", "dlu", "dlx", "dlo"];

/// Code-bearing (script) extensions; binary plugin formats are never
/// content-scanned.
pub(crate) const SCRIPT_EXTENSIONS: &[&str] = &["ms", "mse"];

/// Content scans look at the first 5 qualifying files at most.
pub(crate) const CONTENT_SCAN_LIMIT: usize = 5;

/// Header and naming scans look at the first 3 files at most.
pub(crate) const HEADER_SCAN_LIMIT: usize = 3;

/// Single-letter assignments tolerated per file before the naming
/// check fails.
pub(crate) const NAMING_VIOLATION_LIMIT: usize = 5;

/// Total plugin payload must stay strictly under this many megabytes.
pub(crate) const SIZE_LIMIT_MB: f64 = 50.0;

/// File name of the persisted report, written into the scanned directory.
pub const REPORT_FILE_NAME: &str = "verification-report.json";
