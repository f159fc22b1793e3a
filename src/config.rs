//! Engine tunables.
//!
//! Every policy constant lives here as an immutable value passed into the
//! engine at call time, so tests can override thresholds without shared
//! state. `Default` impls carry the production constants.

use serde::{Deserialize, Serialize};

use crate::types::MasteryLevel;

/// Typo tolerance for free-text grading.
///
/// Tolerance is `ceil(expected_len / chars_per_edit)` edits (at least 1),
/// where `expected_len` is the char count of the normalized expected
/// answer. The ceiling keeps the allowance growing as soon as an answer
/// crosses a multiple of `chars_per_edit`, so a 7-char answer already
/// tolerates two edits (covering adjacent-letter transpositions, which
/// cost two). Empty answers never fuzzy-match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyMatchPolicy {
    pub chars_per_edit: usize,
}

impl Default for FuzzyMatchPolicy {
    fn default() -> Self {
        Self { chars_per_edit: 6 }
    }
}

impl FuzzyMatchPolicy {
    pub fn tolerance_for(&self, expected_len: usize) -> usize {
        if expected_len == 0 {
            return 0;
        }
        expected_len.div_ceil(self.chars_per_edit.max(1)).max(1)
    }
}

/// Weights for the composite mastery score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryWeights {
    /// Accuracy contributes `accuracy * accuracy_scale` points.
    pub accuracy_scale: f64,
    /// Accuracy assumed when there is no answer data at all.
    pub neutral_accuracy: f64,
    pub speed_bonus_max: f64,
    /// Points shaved off the speed bonus per second of average latency.
    pub speed_penalty_per_second: f64,
    pub streak_bonus_max: f64,
    pub improving_bonus: f64,
    pub declining_penalty: f64,
    pub decay_per_day: f64,
}

impl Default for MasteryWeights {
    fn default() -> Self {
        Self {
            accuracy_scale: 70.0,
            neutral_accuracy: 0.5,
            speed_bonus_max: 15.0,
            speed_penalty_per_second: 0.2,
            streak_bonus_max: 10.0,
            improving_bonus: 5.0,
            declining_penalty: 10.0,
            decay_per_day: 0.5,
        }
    }
}

/// Ascending score thresholds for the six mastery levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryThresholds {
    pub novice: f64,
    pub beginner: f64,
    pub intermediate: f64,
    pub proficient: f64,
    pub expert: f64,
    pub master: f64,
}

impl Default for MasteryThresholds {
    fn default() -> Self {
        Self {
            novice: 0.0,
            beginner: 20.0,
            intermediate: 40.0,
            proficient: 60.0,
            expert: 80.0,
            master: 95.0,
        }
    }
}

impl MasteryThresholds {
    pub fn threshold(&self, level: MasteryLevel) -> f64 {
        match level {
            MasteryLevel::Novice => self.novice,
            MasteryLevel::Beginner => self.beginner,
            MasteryLevel::Intermediate => self.intermediate,
            MasteryLevel::Proficient => self.proficient,
            MasteryLevel::Expert => self.expert,
            MasteryLevel::Master => self.master,
        }
    }

    /// Maps a score to its level. Scores below the novice threshold map to
    /// novice; scores at or above the master threshold map to master.
    pub fn level_for(&self, score: f64) -> MasteryLevel {
        let mut current = MasteryLevel::Novice;
        for level in MasteryLevel::ALL {
            if score >= self.threshold(level) {
                current = level;
            }
        }
        current
    }
}

/// Cutoffs for skill-gap classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapThresholds {
    /// Percentages strictly below this are gaps.
    pub gap_below: f64,
    /// Percentages at or above this are strengths.
    pub strength_at: f64,
    /// Target percentage used when ranking gap priority.
    pub target_score: f64,
    /// How many remediation recommendations to emit.
    pub max_recommendations: usize,
}

impl Default for GapThresholds {
    fn default() -> Self {
        Self {
            gap_below: 70.0,
            strength_at: 90.0,
            target_score: 70.0,
            max_recommendations: 5,
        }
    }
}

/// Weights for scoring a learning path against a learner profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommenderWeights {
    /// Points awarded for an exact grade-level match.
    pub grade_weight: f64,
    /// Points lost per grade level of distance.
    pub grade_falloff: f64,
    /// Points awarded when all path prerequisites are completed; scaled by
    /// the satisfied fraction otherwise.
    pub prerequisite_weight: f64,
    /// Flat bonus when any path outcome matches a learner interest.
    pub interest_bonus: f64,
}

impl Default for RecommenderWeights {
    fn default() -> Self {
        Self {
            grade_weight: 40.0,
            grade_falloff: 8.0,
            prerequisite_weight: 30.0,
            interest_bonus: 20.0,
        }
    }
}

/// Practice-session assembly settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSettings {
    pub question_count: usize,
    pub shuffle: bool,
    /// How many recent responses feed the difficulty target.
    pub history_window: usize,
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            question_count: 10,
            shuffle: true,
            history_window: 10,
        }
    }
}

/// Aggregate of every tunable, for callers that want one handle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub fuzzy: FuzzyMatchPolicy,
    pub mastery: MasteryWeights,
    pub mastery_thresholds: MasteryThresholds,
    pub gaps: GapThresholds,
    pub recommender: RecommenderWeights,
    pub practice: PracticeSettings,
}
