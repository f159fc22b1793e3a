//! Practice-session assembly.
//!
//! Bundles the adaptive difficulty target with item selection and a
//! reproducible shuffle. The random source is injected so tests (and
//! replayable sessions) can seed it explicitly.

use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::PracticeSettings;
use crate::difficulty::target_difficulty;
use crate::types::{Item, ResponseOutcome};

/// Deterministic generator for reproducible shuffles.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// In-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Assembles a practice set around the learner's current difficulty
/// target.
///
/// The most recent `settings.history_window` outcomes drive the target;
/// answered items are excluded; the `settings.question_count` items
/// closest to the target are kept (stable by original order on ties) and
/// then shuffled when `settings.shuffle` is set.
pub fn build_practice_set<'a, R: Rng>(
    items: &'a [Item],
    answered_ids: &HashSet<String>,
    recent: &[ResponseOutcome],
    settings: &PracticeSettings,
    rng: &mut R,
) -> Vec<&'a Item> {
    let window_start = recent.len().saturating_sub(settings.history_window);
    let target = target_difficulty(&recent[window_start..]);

    let mut candidates: Vec<&Item> = items
        .iter()
        .filter(|item| !answered_ids.contains(&item.id))
        .collect();
    candidates.sort_by_key(|item| item.difficulty.distance(target));
    candidates.truncate(settings.question_count);

    if settings.shuffle {
        shuffle(&mut candidates, rng);
    }

    tracing::trace!(
        target = target.value(),
        selected = candidates.len(),
        "assembled practice set"
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, ItemType};

    fn item(id: &str, difficulty: u8) -> Item {
        Item {
            id: id.to_string(),
            text: String::new(),
            item_type: ItemType::MultipleChoice,
            correct_answer: "a".into(),
            options: vec![],
            difficulty: Difficulty::new(difficulty).unwrap(),
            points: 10,
            skill_code: None,
        }
    }

    fn bank() -> Vec<Item> {
        (1..=10).map(|d| item(&format!("q{d}"), d)).collect()
    }

    #[test]
    fn shuffle_is_reproducible_for_equal_seeds() {
        let mut a: Vec<u32> = (0..50).collect();
        let mut b: Vec<u32> = (0..50).collect();
        shuffle(&mut a, &mut seeded_rng(42));
        shuffle(&mut b, &mut seeded_rng(42));
        assert_eq!(a, b);

        let mut c: Vec<u32> = (0..50).collect();
        shuffle(&mut c, &mut seeded_rng(7));
        assert_ne!(a, c, "different seeds should permute differently");
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut values: Vec<u32> = (0..20).collect();
        shuffle(&mut values, &mut seeded_rng(1));
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<u32>>());
    }

    #[test]
    fn practice_set_centers_on_target() {
        let items = bank();
        let settings = PracticeSettings {
            question_count: 3,
            shuffle: false,
            history_window: 10,
        };
        // No history: target is 5, closest three are q5, q4, q6.
        let set = build_practice_set(&items, &HashSet::new(), &[], &settings, &mut seeded_rng(0));
        let ids: Vec<&str> = set.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["q5", "q4", "q6"]);
    }

    #[test]
    fn practice_set_excludes_answered_and_respects_count() {
        let items = bank();
        let answered: HashSet<String> = ["q5".to_string()].into();
        let settings = PracticeSettings {
            question_count: 4,
            shuffle: false,
            history_window: 10,
        };
        let set = build_practice_set(&items, &answered, &[], &settings, &mut seeded_rng(0));
        assert_eq!(set.len(), 4);
        assert!(set.iter().all(|i| i.id != "q5"));
    }

    #[test]
    fn shuffled_set_has_same_items_for_same_seed() {
        let items = bank();
        let settings = PracticeSettings::default();
        let a = build_practice_set(&items, &HashSet::new(), &[], &settings, &mut seeded_rng(9));
        let b = build_practice_set(&items, &HashSet::new(), &[], &settings, &mut seeded_rng(9));
        let ids = |set: &[&Item]| set.iter().map(|i| i.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn window_limits_history_considered() {
        let items = bank();
        let settings = PracticeSettings {
            question_count: 1,
            shuffle: false,
            history_window: 4,
        };
        // Old failures outside the window; recent window is all-correct at 5,
        // so the target moves up to 6.
        let mut recent = vec![
            ResponseOutcome { is_correct: false, difficulty: Difficulty::new(2).unwrap() };
            6
        ];
        recent.extend(vec![
            ResponseOutcome { is_correct: true, difficulty: Difficulty::MID };
            4
        ]);
        let set = build_practice_set(&items, &HashSet::new(), &recent, &settings, &mut seeded_rng(0));
        assert_eq!(set[0].id, "q6");
    }
}
