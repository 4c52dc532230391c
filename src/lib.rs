//! maxcheck - static verifier for 3ds Max plugin directories
//!
//! maxcheck scores a plugin directory against a fixed checklist across
//! four weighted levels (basic, functional, compatibility, performance),
//! maps the result to a four-tier rating, and emits both a console
//! report and a persisted `verification-report.json`.

pub mod error;
pub mod models;
pub mod scanner;
pub mod verifier;

// Re-exports for convenience
pub use error::{VerifyError, VerifyResult};
pub use models::{Check, Level, LevelKey, Levels, Rating, VerificationResult};
pub use scanner::{scan_directory, PluginScan};
pub use verifier::{
    run_verification, run_verification_with_callback, save_report, CheckSink, REPORT_FILE_NAME,
};
