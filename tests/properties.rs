//! Property tests for scoring and rating.

use proptest::prelude::*;

use maxcheck::verifier::{determine_rating, overall_score};
use maxcheck::{Check, Level, LevelKey, Levels};

fn checks(passed: usize, failed: usize) -> Vec<Check> {
    let mut out = Vec::new();
    for i in 0..passed {
        out.push(Check::new(format!("p{}", i), true, ""));
    }
    for i in 0..failed {
        out.push(Check::new(format!("f{}", i), false, ""));
    }
    out
}

fn levels_from(counts: [(usize, usize); 4]) -> Levels {
    Levels {
        level1: Level::from_checks(LevelKey::Level1, checks(counts[0].0, counts[0].1)),
        level2: Level::from_checks(LevelKey::Level2, checks(counts[1].0, counts[1].1)),
        level3: Level::from_checks(LevelKey::Level3, checks(counts[2].0, counts[2].1)),
        level4: Level::from_checks(LevelKey::Level4, checks(counts[3].0, counts[3].1)),
    }
}

fn counts() -> impl Strategy<Value = (usize, usize)> {
    (0usize..12, 0usize..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a level's score is exactly 100*p/(p+f).
    #[test]
    fn property_level_score_is_exact_ratio((p, f) in counts()) {
        let score = Level::score_of(&checks(p, f));
        if p + f == 0 {
            prop_assert_eq!(score, 0.0);
        } else {
            prop_assert_eq!(score, (p as f64 / (p + f) as f64) * 100.0);
        }
    }

    /// PROPERTY: the weighted overall score does not depend on check
    /// ordering within a level.
    #[test]
    fn property_overall_score_invariant_to_check_order(
        c1 in counts(), c2 in counts(), c3 in counts(), c4 in counts(),
    ) {
        let forward = levels_from([c1, c2, c3, c4]);

        // Same pass/fail multiset, failures first.
        let reversed = Levels {
            level1: Level::from_checks(LevelKey::Level1, {
                let mut v = checks(c1.0, c1.1);
                v.reverse();
                v
            }),
            level2: Level::from_checks(LevelKey::Level2, {
                let mut v = checks(c2.0, c2.1);
                v.reverse();
                v
            }),
            level3: Level::from_checks(LevelKey::Level3, {
                let mut v = checks(c3.0, c3.1);
                v.reverse();
                v
            }),
            level4: Level::from_checks(LevelKey::Level4, {
                let mut v = checks(c4.0, c4.1);
                v.reverse();
                v
            }),
        };

        prop_assert_eq!(overall_score(&forward), overall_score(&reversed));
    }

    /// PROPERTY: the overall score always lands in [0, 100] and equals
    /// the weighted sum of level scores.
    #[test]
    fn property_overall_score_bounds(
        c1 in counts(), c2 in counts(), c3 in counts(), c4 in counts(),
    ) {
        let levels = levels_from([c1, c2, c3, c4]);
        let overall = overall_score(&levels);
        prop_assert!((0.0..=100.0).contains(&overall));

        let expected: f64 = levels
            .iter()
            .map(|(key, level)| level.score * key.weight())
            .sum();
        prop_assert_eq!(overall, expected);
    }

    /// PROPERTY: raising the overall score while holding the level-1
    /// and level-2 scores fixed never lowers the rating tier.
    #[test]
    fn property_rating_monotonic_in_overall_score(
        c1 in counts(), c2 in counts(),
        lo in 0.0f64..=100.0, hi in 0.0f64..=100.0,
    ) {
        let levels = levels_from([c1, c2, (1, 0), (1, 0)]);
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        prop_assert!(determine_rating(hi, &levels) >= determine_rating(lo, &levels));
    }
}
