//! Response-quality rating.
//!
//! Bridges raw answer events and the SM-2 scheduler: correctness plus
//! latency relative to the item's expected time collapse into a 0..=5
//! [`ResponseQuality`].

use crate::types::ResponseQuality;

const FAST_RATIO: f64 = 0.2;
const MODERATE_RATIO: f64 = 0.5;

/// Rates one response.
///
/// Correct answers never rate below [`ResponseQuality::Difficult`], no
/// matter how slow. A non-positive `expected_time_ms` is treated as "no
/// expectation": correct rates `Difficult`, incorrect `Blackout`.
pub fn response_quality(is_correct: bool, time_spent_ms: i64, expected_time_ms: i64) -> ResponseQuality {
    let ratio = if expected_time_ms > 0 {
        time_spent_ms as f64 / expected_time_ms as f64
    } else {
        f64::INFINITY
    };

    if is_correct {
        if ratio <= FAST_RATIO {
            ResponseQuality::Perfect
        } else if ratio <= MODERATE_RATIO {
            ResponseQuality::Hesitant
        } else {
            ResponseQuality::Difficult
        }
    } else if ratio <= FAST_RATIO {
        ResponseQuality::Wrong
    } else {
        ResponseQuality::Blackout
    }
}
