//! Core data models for maxcheck
//!
//! Defines the structures that make up a verification run:
//! - `Check`: a single named pass/fail test with a detail string
//! - `Level`: one of four fixed verification categories and its checks
//! - `VerificationResult`: the finalized, serializable report
//! - Supporting enums: `LevelKey`, `Rating`

use serde::{Deserialize, Serialize};

/// A single pass/fail test with a human-readable detail string.
///
/// Immutable once produced by a level evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    pub passed: bool,
    pub details: String,
}

impl Check {
    pub fn new(name: impl Into<String>, passed: bool, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            details: details.into(),
        }
    }
}

/// Key of one of the four fixed verification levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelKey {
    Level1,
    Level2,
    Level3,
    Level4,
}

impl LevelKey {
    /// All levels in evaluation order.
    pub const ALL: [LevelKey; 4] = [
        LevelKey::Level1,
        LevelKey::Level2,
        LevelKey::Level3,
        LevelKey::Level4,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            LevelKey::Level1 => "Basic Verification",
            LevelKey::Level2 => "Functional Verification",
            LevelKey::Level3 => "Compatibility Verification",
            LevelKey::Level4 => "Performance Verification",
        }
    }

    /// Fixed weight of this level in the overall score. Sums to 1.0.
    pub fn weight(self) -> f64 {
        match self {
            LevelKey::Level1 => 0.35,
            LevelKey::Level2 => 0.30,
            LevelKey::Level3 => 0.20,
            LevelKey::Level4 => 0.15,
        }
    }
}

/// One verification level: its display name, ordered checks, and
/// derived score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub checks: Vec<Check>,
    pub score: f64,
}

impl Level {
    /// Build a level from its checks; the score is derived, never set
    /// independently.
    pub fn from_checks(key: LevelKey, checks: Vec<Check>) -> Self {
        let score = Self::score_of(&checks);
        Self {
            name: key.display_name().to_string(),
            checks,
            score,
        }
    }

    /// `100 * passed / total`, or 0 for an empty check list.
    pub fn score_of(checks: &[Check]) -> f64 {
        if checks.is_empty() {
            return 0.0;
        }
        let passed = checks.iter().filter(|c| c.passed).count();
        (passed as f64 / checks.len() as f64) * 100.0
    }

    pub fn failed_check_names(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.name.as_str())
            .collect()
    }
}

/// The four levels, in fixed order. Serializes as an object with
/// exactly the keys `level1`..`level4`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Levels {
    pub level1: Level,
    pub level2: Level,
    pub level3: Level,
    pub level4: Level,
}

impl Levels {
    pub fn get(&self, key: LevelKey) -> &Level {
        match key {
            LevelKey::Level1 => &self.level1,
            LevelKey::Level2 => &self.level2,
            LevelKey::Level3 => &self.level3,
            LevelKey::Level4 => &self.level4,
        }
    }

    /// Iterate levels in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (LevelKey, &Level)> {
        LevelKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

/// Four-tier outcome label derived from the weighted scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    Fail,
    Pass,
    Good,
    Excellent,
}

impl Rating {
    /// Anything but `Fail` maps to process exit code 0.
    pub fn is_passing(self) -> bool {
        self != Rating::Fail
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Excellent => write!(f, "Excellent"),
            Rating::Good => write!(f, "Good"),
            Rating::Pass => write!(f, "Pass"),
            Rating::Fail => write!(f, "Fail"),
        }
    }
}

/// The finalized result of one verification run.
///
/// Created fresh per invocation, populated level-by-level in fixed
/// order, finalized by one scoring pass, then never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Plugin name extracted from the README heading, empty if none.
    pub plugin_name: String,
    /// Semantic version extracted from the README, empty if none.
    pub version: String,
    /// ISO-8601 timestamp of the run.
    pub timestamp: String,
    pub levels: Levels,
    pub overall_score: f64,
    pub rating: Rating,
    /// Reserved, always empty.
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}
