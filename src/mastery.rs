//! Composite mastery scoring.
//!
//! Folds recent performance signals into a single 0..=100 score:
//! accuracy carries most of the weight, with bonuses for speed and a
//! consistency streak, an adjustment for the recent trend, and a linear
//! decay for days of inactivity. The score maps onto the six
//! [`MasteryLevel`]s via [`MasteryThresholds`].

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{MasteryThresholds, MasteryWeights};
use crate::types::{MasteryLevel, Trend};

/// Aggregated performance signals for one (student, topic).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryInput {
    pub questions_correct: u32,
    pub questions_total: u32,
    pub average_time_seconds: f64,
    pub consistency_streak: u32,
    pub recent_trend: Trend,
    pub days_since_last_activity: f64,
}

/// Composite 0..=100 score.
///
/// With no answer data (`questions_total == 0`) accuracy defaults to the
/// configured neutral value rather than zero, so a brand-new topic does not
/// read as total failure.
pub fn mastery_score(input: &MasteryInput, weights: &MasteryWeights) -> f64 {
    let accuracy = if input.questions_total > 0 {
        input.questions_correct as f64 / input.questions_total as f64
    } else {
        weights.neutral_accuracy
    };

    let base = accuracy * weights.accuracy_scale;
    let speed_bonus = (weights.speed_bonus_max
        - input.average_time_seconds * weights.speed_penalty_per_second)
        .clamp(0.0, weights.speed_bonus_max);
    let streak_bonus = (input.consistency_streak as f64).clamp(0.0, weights.streak_bonus_max);
    let trend_adjustment = match input.recent_trend {
        Trend::Improving => weights.improving_bonus,
        Trend::Stable => 0.0,
        Trend::Declining => -weights.declining_penalty,
    };
    let decay = input.days_since_last_activity * weights.decay_per_day;

    (base + speed_bonus + streak_bonus + trend_adjustment - decay).clamp(0.0, 100.0)
}

/// Scores many inputs in parallel. Inputs are independent per
/// (student, topic), so ordering between them does not matter; the output
/// preserves input order.
pub fn score_mastery_batch(inputs: &[MasteryInput], weights: &MasteryWeights) -> Vec<f64> {
    inputs
        .par_iter()
        .map(|input| mastery_score(input, weights))
        .collect()
}

/// Position within the current level's score band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryProgress {
    pub level: MasteryLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_level: Option<MasteryLevel>,
    pub points_to_next_level: f64,
    /// 0..=100 fraction of the current band already covered.
    pub progress_in_level: f64,
}

/// Linear interpolation between the current level's threshold and the next
/// level's. At master the band is complete: 100% progress, no next level.
pub fn mastery_progress(score: f64, thresholds: &MasteryThresholds) -> MasteryProgress {
    let level = thresholds.level_for(score);
    match level.next() {
        None => MasteryProgress {
            level,
            next_level: None,
            points_to_next_level: 0.0,
            progress_in_level: 100.0,
        },
        Some(next) => {
            let floor = thresholds.threshold(level);
            let ceiling = thresholds.threshold(next);
            let span = (ceiling - floor).max(f64::EPSILON);
            let covered = (score - floor).clamp(0.0, span);
            MasteryProgress {
                level,
                next_level: Some(next),
                points_to_next_level: ceiling - score.max(floor),
                progress_in_level: covered / span * 100.0,
            }
        }
    }
}

/// Persisted mastery snapshot for one (student, topic).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryRecord {
    pub student_id: String,
    pub topic_id: String,
    pub score: f64,
    pub level: MasteryLevel,
    pub last_computed_at: DateTime<Utc>,
}

impl MasteryRecord {
    /// Builds a fresh snapshot from current signals. The 0..=100 clamp and
    /// the derived level are enforced here, the only mutation point.
    pub fn recompute(
        student_id: impl Into<String>,
        topic_id: impl Into<String>,
        input: &MasteryInput,
        weights: &MasteryWeights,
        thresholds: &MasteryThresholds,
        now: DateTime<Utc>,
    ) -> Self {
        let score = mastery_score(input, weights);
        Self {
            student_id: student_id.into(),
            topic_id: topic_id.into(),
            score,
            level: thresholds.level_for(score),
            last_computed_at: now,
        }
    }
}
