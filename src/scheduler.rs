//! SM-2 spaced-repetition scheduling.
//!
//! [`sm2_review`] is the pure primitive: prior card state plus a quality
//! rating in, next state out. [`ReviewState`] is the persisted card shape;
//! its [`ReviewState::apply_review`] stamps `next_due_at` for callers that
//! want the whole card updated in one step. The engine never persists
//! anything itself.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ResponseQuality;

/// Ease factor floor; repeated failures can never push ease below this.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Ease factor for a card that has never been reviewed.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// The scheduler-owned fields of a card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sm2State {
    pub ease_factor: f64,
    pub interval_days: u32,
    pub repetitions: u32,
}

impl Default for Sm2State {
    fn default() -> Self {
        Self {
            ease_factor: INITIAL_EASE_FACTOR,
            interval_days: 1,
            repetitions: 0,
        }
    }
}

/// One SM-2 step. Deterministic; no side effects.
///
/// The ease update applies on success and failure alike. A failing quality
/// (< 3) resets repetitions to 0 and the interval to 1 day. On success the
/// third and later repetitions multiply the prior interval by the ease
/// factor carried into this review.
pub fn sm2_review(quality: ResponseQuality, state: &Sm2State) -> Sm2State {
    let q = quality.as_u8() as f64;
    let delta = 0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02);
    let ease_factor = (state.ease_factor + delta).max(MIN_EASE_FACTOR);

    if !quality.is_success() {
        return Sm2State {
            ease_factor,
            interval_days: 1,
            repetitions: 0,
        };
    }

    let repetitions = state.repetitions + 1;
    let interval_days = match repetitions {
        1 => 1,
        2 => 6,
        _ => {
            let grown = (state.interval_days.max(1) as f64 * state.ease_factor).round();
            grown.max(1.0) as u32
        }
    };

    Sm2State {
        ease_factor,
        interval_days,
        repetitions,
    }
}

/// A persisted review card, keyed by (subject, item).
///
/// Never deleted; `repetitions == 0` simply means "reset".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    pub subject_id: String,
    pub item_id: String,
    pub ease_factor: f64,
    pub interval_days: u32,
    pub repetitions: u32,
    pub next_due_at: DateTime<Utc>,
}

impl ReviewState {
    /// A fresh card, due immediately.
    pub fn new(subject_id: impl Into<String>, item_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        let sm2 = Sm2State::default();
        Self {
            subject_id: subject_id.into(),
            item_id: item_id.into(),
            ease_factor: sm2.ease_factor,
            interval_days: sm2.interval_days,
            repetitions: sm2.repetitions,
            next_due_at: now,
        }
    }

    pub fn sm2(&self) -> Sm2State {
        Sm2State {
            ease_factor: self.ease_factor,
            interval_days: self.interval_days,
            repetitions: self.repetitions,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_due_at <= now
    }

    /// Runs one SM-2 step and stamps `next_due_at = now + interval` days.
    pub fn apply_review(&self, quality: ResponseQuality, now: DateTime<Utc>) -> ReviewState {
        let next = sm2_review(quality, &self.sm2());
        tracing::debug!(
            subject_id = %self.subject_id,
            item_id = %self.item_id,
            quality = quality.as_u8(),
            interval_days = next.interval_days,
            repetitions = next.repetitions,
            "scheduled review"
        );
        ReviewState {
            subject_id: self.subject_id.clone(),
            item_id: self.item_id.clone(),
            ease_factor: next.ease_factor,
            interval_days: next.interval_days,
            repetitions: next.repetitions,
            next_due_at: now + Duration::days(next.interval_days as i64),
        }
    }
}
