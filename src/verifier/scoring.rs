//! Weighted scoring, rating thresholds, and recommendations

use crate::models::{LevelKey, Levels, Rating};

/// Weighted sum of the four level scores.
pub fn overall_score(levels: &Levels) -> f64 {
    levels
        .iter()
        .map(|(key, level)| level.score * key.weight())
        .sum()
}

/// Ordered threshold evaluation; the first matching rule wins.
pub fn determine_rating(overall: f64, levels: &Levels) -> Rating {
    let level1 = levels.level1.score;
    let level2 = levels.level2.score;

    if overall >= 95.0 && level1 == 100.0 && level2 >= 90.0 {
        Rating::Excellent
    } else if overall >= 85.0 && level1 >= 90.0 && level2 >= 80.0 {
        Rating::Good
    } else if overall >= 70.0 && level1 >= 80.0 {
        Rating::Pass
    } else {
        Rating::Fail
    }
}

/// One recommendation per level scoring below 80, naming up to the
/// first 3 failed checks; a single acknowledgment when nothing needs
/// improvement.
pub fn generate_recommendations(levels: &Levels) -> Vec<String> {
    let mut recommendations = Vec::new();

    for (_, level) in levels.iter() {
        if level.score >= 80.0 {
            continue;
        }
        let failed = level.failed_check_names();
        if failed.is_empty() {
            continue;
        }
        recommendations.push(format!(
            "{}: needs improvement - {}",
            level.name,
            failed[..failed.len().min(3)].join(", ")
        ));
    }

    if recommendations.is_empty() {
        recommendations.push("All checks look good. Keep it up!".to_string());
    }

    recommendations
}
