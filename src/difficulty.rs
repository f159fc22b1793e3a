//! Adaptive difficulty targeting and item selection.
//!
//! The target tracks a rolling window of recent outcomes: high accuracy
//! steps difficulty up from the window's average, low accuracy steps it
//! down. Selection then picks the unanswered item closest to the target,
//! preferring anything within one step and breaking ties by original
//! position so results are stable.

use std::collections::HashSet;

use crate::types::{Difficulty, Item, ResponseOutcome};

const RAISE_ACCURACY: f64 = 0.8;
const HOLD_ACCURACY: f64 = 0.6;
const EASE_ACCURACY: f64 = 0.4;

/// Next target difficulty from a window of recent (correct, difficulty)
/// outcomes. An empty window starts at medium (5).
pub fn target_difficulty(recent: &[ResponseOutcome]) -> Difficulty {
    if recent.is_empty() {
        return Difficulty::MID;
    }

    let correct = recent.iter().filter(|r| r.is_correct).count();
    let accuracy = correct as f64 / recent.len() as f64;
    let avg = recent
        .iter()
        .map(|r| r.difficulty.value() as f64)
        .sum::<f64>()
        / recent.len() as f64;
    let avg = avg.round() as i64;

    let target = if accuracy >= RAISE_ACCURACY {
        avg + 1
    } else if accuracy >= HOLD_ACCURACY {
        avg
    } else if accuracy >= EASE_ACCURACY {
        avg - 1
    } else {
        avg - 2
    };

    Difficulty::clamped(target)
}

/// Picks the unanswered item best matching the target difficulty.
///
/// Items within one step of the target are preferred; within the candidate
/// set the smallest distance wins and ties keep original order. Returns
/// `None` when every item has already been answered.
pub fn select_item<'a>(
    items: &'a [Item],
    target: Difficulty,
    answered_ids: &HashSet<String>,
) -> Option<&'a Item> {
    let remaining: Vec<&Item> = items
        .iter()
        .filter(|item| !answered_ids.contains(&item.id))
        .collect();
    if remaining.is_empty() {
        return None;
    }

    let near = remaining
        .iter()
        .copied()
        .filter(|item| item.difficulty.distance(target) <= 1)
        .min_by_key(|item| item.difficulty.distance(target));
    if near.is_some() {
        return near;
    }

    remaining
        .iter()
        .copied()
        .min_by_key(|item| item.difficulty.distance(target))
}
