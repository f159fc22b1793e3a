//! Benchmark suite for mastery-engine
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mastery_engine::config::MasteryWeights;
use mastery_engine::mastery::{mastery_score, score_mastery_batch, MasteryInput};
use mastery_engine::scheduler::{sm2_review, Sm2State};
use mastery_engine::types::{ResponseQuality, Trend};
use mastery_engine::{check_answer, FuzzyMatchPolicy, ItemType};

fn bench_sm2_review(c: &mut Criterion) {
    let state = Sm2State {
        ease_factor: 2.5,
        interval_days: 6,
        repetitions: 2,
    };
    c.bench_function("sm2_review", |b| {
        b.iter(|| sm2_review(black_box(ResponseQuality::Perfect), black_box(&state)))
    });
}

fn bench_fuzzy_check_answer(c: &mut Criterion) {
    let policy = FuzzyMatchPolicy::default();
    c.bench_function("check_answer/fuzzy", |b| {
        b.iter(|| {
            check_answer(
                black_box("photosinthesis"),
                black_box("photosynthesis"),
                ItemType::ShortAnswer,
                &policy,
            )
        })
    });
}

fn bench_mastery_batch(c: &mut Criterion) {
    let weights = MasteryWeights::default();
    let inputs: Vec<MasteryInput> = (0u32..10_000)
        .map(|i| MasteryInput {
            questions_correct: i % 50,
            questions_total: 50,
            average_time_seconds: (i % 120) as f64,
            consistency_streak: i % 12,
            recent_trend: Trend::Stable,
            days_since_last_activity: (i % 30) as f64,
        })
        .collect();

    c.bench_function("mastery_score/single", |b| {
        b.iter(|| mastery_score(black_box(&inputs[0]), &weights))
    });
    c.bench_function("mastery_score/batch_10k", |b| {
        b.iter(|| score_mastery_batch(black_box(&inputs), &weights))
    });
}

criterion_group!(benches, bench_sm2_review, bench_fuzzy_check_answer, bench_mastery_batch);
criterion_main!(benches);
