//! # mastery-engine - adaptive learning & mastery algorithms
//!
//! Pure, stateless algorithms behind a tutoring platform's adaptive
//! learning loop:
//!
//! - **Answer grading** - normalization plus typo-tolerant matching
//! - **Response quality** - correctness + latency into a 0..=5 rating
//! - **SM-2 scheduling** - spaced-repetition intervals and ease factors
//! - **Mastery scoring** - composite 0..=100 score and six-level ladder
//! - **Adaptive difficulty** - rolling-window targeting and item selection
//! - **Skill-gap analysis** - per-skill accuracy, priorities, remediation
//! - **Learning paths** - prerequisite-graph traversal and path ranking
//!
//! The engine performs no I/O and holds no shared state: every operation
//! is a synchronous function over plain values, and the caller owns
//! persistence of [`scheduler::ReviewState`] and [`mastery::MasteryRecord`].
//! Degenerate inputs (empty histories, zero totals) produce documented
//! defaults; out-of-domain inputs are rejected with [`EngineError`] at
//! construction.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use mastery_engine::{
//!     check_answer, response_quality, FuzzyMatchPolicy, ItemType, ReviewState,
//! };
//!
//! let policy = FuzzyMatchPolicy::default();
//! let correct = check_answer(" Paris. ", "paris", ItemType::ShortAnswer, &policy);
//!
//! let quality = response_quality(correct, 4_000, 30_000);
//! let card = ReviewState::new("geo", "capital-fr", Utc::now());
//! let card = card.apply_review(quality, Utc::now());
//! assert_eq!(card.repetitions, 1);
//! ```

pub mod answer;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod gaps;
pub mod mastery;
pub mod path;
pub mod practice;
pub mod quality;
pub mod scheduler;
pub mod types;

pub use answer::{check_answer, levenshtein, normalize_answer};
pub use config::{
    EngineConfig, FuzzyMatchPolicy, GapThresholds, MasteryThresholds, MasteryWeights,
    PracticeSettings, RecommenderWeights,
};
pub use difficulty::{select_item, target_difficulty};
pub use error::EngineError;
pub use gaps::{
    estimate_grade_level, gap_priority, gaps_and_strengths, practice_recommendations,
    skill_breakdown, GapsAndStrengths, PracticeRecommendation, RecommendationKind,
    SkillObservation, SkillResult,
};
pub use mastery::{
    mastery_progress, mastery_score, score_mastery_batch, MasteryInput, MasteryProgress,
    MasteryRecord,
};
pub use path::{
    available_nodes, next_recommended_node, path_match_score, path_progress, recommend_paths,
    PathProgress, PathRecommendation, PrerequisiteStatus,
};
pub use practice::{build_practice_set, seeded_rng, shuffle};
pub use quality::response_quality;
pub use scheduler::{sm2_review, ReviewState, Sm2State, INITIAL_EASE_FACTOR, MIN_EASE_FACTOR};
pub use types::{
    Difficulty, DifficultyCategory, GapPriority, Item, ItemType, LearnerProfile, LearningPath,
    LearningPathNode, MasteryLevel, ResponseEvent, ResponseOutcome, ResponseQuality, Trend,
};
