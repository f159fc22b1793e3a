//! Property-Based Tests for the engine's invariants:
//! - SM-2: failures always reset; ease factor never falls below 1.3
//! - Quality ratings stay in 0..=5 and correct answers are successes
//! - Grading is case/whitespace-insensitive for every item type
//! - Target difficulty stays in 1..=10
//! - Mastery scores stay in 0..=100 and levels follow thresholds
//! - Graph traversal never yields completed or blocked nodes

use proptest::prelude::*;
use std::collections::HashSet;

use mastery_engine::config::{FuzzyMatchPolicy, MasteryThresholds, MasteryWeights};
use mastery_engine::mastery::{mastery_score, MasteryInput};
use mastery_engine::path::graph::{available_nodes, path_progress};
use mastery_engine::scheduler::{sm2_review, Sm2State, MIN_EASE_FACTOR};
use mastery_engine::types::{
    Difficulty, DifficultyCategory, ItemType, LearningPath, LearningPathNode, ResponseOutcome,
    ResponseQuality, Trend,
};
use mastery_engine::{check_answer, response_quality, target_difficulty};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_quality() -> impl Strategy<Value = ResponseQuality> {
    (0u8..=5).prop_map(|q| ResponseQuality::try_from(q).unwrap())
}

fn arb_sm2_state() -> impl Strategy<Value = Sm2State> {
    (130u64..=400, 1u32..=365, 0u32..=50).prop_map(|(ease_x100, interval, reps)| Sm2State {
        ease_factor: ease_x100 as f64 / 100.0,
        interval_days: interval,
        repetitions: reps,
    })
}

fn arb_difficulty() -> impl Strategy<Value = Difficulty> {
    (1u8..=10).prop_map(|d| Difficulty::new(d).unwrap())
}

fn arb_outcomes() -> impl Strategy<Value = Vec<ResponseOutcome>> {
    proptest::collection::vec(
        (any::<bool>(), arb_difficulty()).prop_map(|(is_correct, difficulty)| ResponseOutcome {
            is_correct,
            difficulty,
        }),
        1..40,
    )
}

fn arb_item_type() -> impl Strategy<Value = ItemType> {
    prop_oneof![
        Just(ItemType::MultipleChoice),
        Just(ItemType::TrueFalse),
        Just(ItemType::ShortAnswer),
        Just(ItemType::FillBlank),
    ]
}

fn arb_trend() -> impl Strategy<Value = Trend> {
    prop_oneof![Just(Trend::Improving), Just(Trend::Stable), Just(Trend::Declining)]
}

fn arb_mastery_input() -> impl Strategy<Value = MasteryInput> {
    (
        0u32..=200,
        0u32..=200,
        0.0f64..=600.0,
        0u32..=100,
        arb_trend(),
        0.0f64..=365.0,
    )
        .prop_map(
            |(correct, extra, average_time_seconds, streak, trend, days)| MasteryInput {
                questions_correct: correct,
                questions_total: correct + extra,
                average_time_seconds,
                consistency_streak: streak,
                recent_trend: trend,
                days_since_last_activity: days,
            },
        )
}

fn linear_nodes(count: usize) -> Vec<LearningPathNode> {
    (0..count)
        .map(|i| LearningPathNode {
            id: format!("node-{i}"),
            title: format!("Node {i}"),
            node_type: "lesson".to_string(),
            order: i as i32,
            estimated_minutes: 20,
            points_value: 10,
            prerequisites: if i == 0 {
                HashSet::new()
            } else {
                [format!("node-{}", i - 1)].into()
            },
            is_optional: false,
        })
        .collect()
}

fn arb_path_and_completed() -> impl Strategy<Value = (LearningPath, HashSet<String>)> {
    (1usize..=12).prop_flat_map(|count| {
        proptest::collection::hash_set(0..count, 0..=count).prop_map(move |done| {
            let path = LearningPath {
                id: "path".to_string(),
                title: "Path".to_string(),
                nodes: linear_nodes(count),
                prerequisites: vec![],
                outcomes: vec![],
                difficulty: DifficultyCategory::Medium,
                grade_level: 5,
                is_active: true,
            };
            let completed: HashSet<String> = done.into_iter().map(|i| format!("node-{i}")).collect();
            (path, completed)
        })
    })
}

// ============================================================================
// SM-2
// ============================================================================

proptest! {
    #[test]
    fn failing_quality_always_resets(state in arb_sm2_state(), q in 0u8..=2) {
        let quality = ResponseQuality::try_from(q).unwrap();
        let next = sm2_review(quality, &state);
        prop_assert_eq!(next.repetitions, 0);
        prop_assert_eq!(next.interval_days, 1);
    }

    #[test]
    fn ease_factor_has_a_floor(state in arb_sm2_state(), qualities in proptest::collection::vec(arb_quality(), 1..30)) {
        let mut card = state;
        for quality in qualities {
            card = sm2_review(quality, &card);
            prop_assert!(card.ease_factor >= MIN_EASE_FACTOR - 1e-12);
            prop_assert!(card.interval_days >= 1);
        }
    }

    #[test]
    fn success_increments_repetitions(state in arb_sm2_state(), q in 3u8..=5) {
        let quality = ResponseQuality::try_from(q).unwrap();
        let next = sm2_review(quality, &state);
        prop_assert_eq!(next.repetitions, state.repetitions + 1);
    }
}

// ============================================================================
// Quality
// ============================================================================

proptest! {
    #[test]
    fn quality_domain_holds(is_correct in any::<bool>(), spent in 0i64..10_000_000, expected in 0i64..10_000_000) {
        let quality = response_quality(is_correct, spent, expected);
        prop_assert!(quality.as_u8() <= 5);
        if is_correct {
            prop_assert!(quality.is_success(), "correct answer rated {}", quality.as_u8());
        } else {
            prop_assert!(!quality.is_success(), "incorrect answer rated {}", quality.as_u8());
        }
    }
}

// ============================================================================
// Grading
// ============================================================================

proptest! {
    #[test]
    fn grading_ignores_case_and_surrounding_whitespace(
        answer in "[a-z]{1,12}( [a-z]{1,8})?",
        item_type in arb_item_type(),
    ) {
        let policy = FuzzyMatchPolicy::default();
        let messy = format!("  {}  ", answer.to_uppercase());
        prop_assert!(check_answer(&messy, &answer, item_type, &policy));
    }

    #[test]
    fn choice_grading_accepts_only_exact_normalized_matches(
        a in "[a-z]{1,10}",
        b in "[a-z]{1,10}",
    ) {
        let policy = FuzzyMatchPolicy::default();
        let graded = check_answer(&a, &b, ItemType::MultipleChoice, &policy);
        prop_assert_eq!(graded, a == b);
    }
}

// ============================================================================
// Difficulty
// ============================================================================

proptest! {
    #[test]
    fn target_difficulty_stays_in_domain(outcomes in arb_outcomes()) {
        let target = target_difficulty(&outcomes);
        prop_assert!((1..=10).contains(&target.value()));
    }

    #[test]
    fn category_number_round_trip(d in arb_difficulty()) {
        let category = DifficultyCategory::from_number(d);
        prop_assert_eq!(DifficultyCategory::from_number(category.to_number()), category);
    }
}

// ============================================================================
// Mastery
// ============================================================================

proptest! {
    #[test]
    fn mastery_score_stays_in_domain(input in arb_mastery_input()) {
        let score = mastery_score(&input, &MasteryWeights::default());
        prop_assert!((0.0..=100.0).contains(&score), "score {} out of domain", score);
    }

    #[test]
    fn level_threshold_is_consistent(score_x10 in 0i64..=1000) {
        let thresholds = MasteryThresholds::default();
        let score = score_x10 as f64 / 10.0;
        let level = thresholds.level_for(score);
        prop_assert!(score >= thresholds.threshold(level));
        if let Some(next) = level.next() {
            prop_assert!(score < thresholds.threshold(next));
        }
    }
}

// ============================================================================
// Learning-path graph
// ============================================================================

proptest! {
    #[test]
    fn available_nodes_are_truly_available((path, completed) in arb_path_and_completed()) {
        for node in available_nodes(&path, &completed) {
            prop_assert!(!completed.contains(&node.id));
            for prereq in &node.prerequisites {
                prop_assert!(completed.contains(prereq));
            }
        }
    }

    #[test]
    fn completion_hits_100_iff_no_required_remaining((path, completed) in arb_path_and_completed()) {
        let progress = path_progress(&path, &completed);
        if progress.required_remaining == 0 {
            prop_assert_eq!(progress.completion_percentage, 100.0);
            prop_assert_eq!(progress.estimated_minutes_remaining, 0);
        } else {
            prop_assert!(progress.completion_percentage < 100.0);
        }
    }
}
