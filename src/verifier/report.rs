//! Verification entry points and report persistence

use std::path::Path;

use chrono::Local;

use crate::error::{VerifyError, VerifyResult};
use crate::models::{Check, Level, LevelKey, Levels, VerificationResult};
use crate::scanner::scan_directory;

use super::levels;
use super::scoring;
use super::REPORT_FILE_NAME;

/// Receiver for checks as the level evaluators produce them.
pub trait CheckSink {
    fn add_check(&mut self, level: LevelKey, check: Check);

    fn add(
        &mut self,
        level: LevelKey,
        name: impl Into<String>,
        passed: bool,
        details: impl Into<String>,
    ) {
        self.add_check(level, Check::new(name, passed, details));
    }
}

/// Accumulates checks per level while a run is in progress.
#[derive(Debug, Default)]
struct LevelAccumulator {
    level1: Vec<Check>,
    level2: Vec<Check>,
    level3: Vec<Check>,
    level4: Vec<Check>,
}

impl LevelAccumulator {
    fn into_levels(self) -> Levels {
        Levels {
            level1: Level::from_checks(LevelKey::Level1, self.level1),
            level2: Level::from_checks(LevelKey::Level2, self.level2),
            level3: Level::from_checks(LevelKey::Level3, self.level3),
            level4: Level::from_checks(LevelKey::Level4, self.level4),
        }
    }
}

impl CheckSink for LevelAccumulator {
    fn add_check(&mut self, level: LevelKey, check: Check) {
        match level {
            LevelKey::Level1 => self.level1.push(check),
            LevelKey::Level2 => self.level2.push(check),
            LevelKey::Level3 => self.level3.push(check),
            LevelKey::Level4 => self.level4.push(check),
        }
    }
}

/// Run the full verification pipeline over a plugin directory.
///
/// Fails only when the directory itself is missing; every other
/// problem degrades to failed checks inside the result.
pub fn run_verification(plugin_dir: &Path) -> VerifyResult<VerificationResult> {
    run_verification_with_callback(plugin_dir, |_, _| {})
}

/// Like [`run_verification`], invoking `on_check` for every check as
/// it is produced, in level order. Used by the console renderer to
/// stream progress.
pub fn run_verification_with_callback(
    plugin_dir: &Path,
    mut on_check: impl FnMut(LevelKey, &Check),
) -> VerifyResult<VerificationResult> {
    struct CallbackSink<F> {
        inner: LevelAccumulator,
        on_check: F,
    }

    impl<F: FnMut(LevelKey, &Check)> CheckSink for CallbackSink<F> {
        fn add_check(&mut self, level: LevelKey, check: Check) {
            (self.on_check)(level, &check);
            self.inner.add_check(level, check);
        }
    }

    if !plugin_dir.is_dir() {
        return Err(VerifyError::DirectoryNotFound {
            path: plugin_dir.to_path_buf(),
        });
    }

    let scan = scan_directory(plugin_dir);
    let mut sink = CallbackSink {
        inner: LevelAccumulator::default(),
        on_check: |level, check: &Check| on_check(level, check),
    };

    // Levels run in fixed order; each one always completes.
    let meta = levels::verify_level1(&scan, &mut sink);
    levels::verify_level2(&scan, &mut sink);
    levels::verify_level3(&scan, &mut sink);
    levels::verify_level4(&scan, &mut sink);

    let levels = sink.inner.into_levels();
    let overall_score = scoring::overall_score(&levels);
    let rating = scoring::determine_rating(overall_score, &levels);
    let recommendations = scoring::generate_recommendations(&levels);

    Ok(VerificationResult {
        plugin_name: meta.plugin_name.unwrap_or_default(),
        version: meta.version.unwrap_or_default(),
        timestamp: Local::now().to_rfc3339(),
        levels,
        overall_score,
        rating,
        issues: Vec::new(),
        recommendations,
    })
}

/// Persist the result as pretty-printed JSON inside the scanned
/// directory. Non-ASCII text is written literally.
pub fn save_report(plugin_dir: &Path, result: &VerificationResult) -> VerifyResult<std::path::PathBuf> {
    let path = plugin_dir.join(REPORT_FILE_NAME);
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    std::fs::write(&path, json)?;
    Ok(path)
}
