//! Skill-gap analysis.
//!
//! Groups graded responses by skill, classifies weak and strong skills,
//! ranks how urgent each gap is, and turns the weakest skills into
//! remediation recommendations. Also estimates an overall grade level from
//! the grade tags on answered material.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::GapThresholds;
use crate::types::GapPriority;

/// One response joined with its item's skill and grade metadata. The
/// caller resolves `item_id` against the item bank before analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillObservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_name: Option<String>,
    pub is_correct: bool,
    /// Grade level of the item, when tagged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<f64>,
}

/// Per-skill accuracy tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResult {
    pub skill_code: String,
    pub skill_name: String,
    pub correct: u32,
    pub total: u32,
    /// `100 * correct / total`, 0 when total is 0.
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapsAndStrengths {
    pub gaps: Vec<SkillResult>,
    pub strengths: Vec<SkillResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Practice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeRecommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub id: String,
    pub name: String,
    pub reason: String,
}

/// Untagged skills are pooled under this code.
pub const GENERAL_SKILL: &str = "general";

/// Groups observations by skill code (missing codes pool into
/// [`GENERAL_SKILL`]), preserving first-appearance order.
pub fn skill_breakdown(observations: &[SkillObservation]) -> Vec<SkillResult> {
    let mut order: Vec<String> = Vec::new();
    let mut by_code: HashMap<String, SkillResult> = HashMap::new();

    for obs in observations {
        let code = obs.skill_code.clone().unwrap_or_else(|| GENERAL_SKILL.to_string());
        let entry = by_code.entry(code.clone()).or_insert_with(|| {
            order.push(code.clone());
            SkillResult {
                skill_code: code.clone(),
                skill_name: obs
                    .skill_name
                    .clone()
                    .unwrap_or_else(|| code.clone()),
                correct: 0,
                total: 0,
                percentage: 0.0,
            }
        });
        entry.total += 1;
        if obs.is_correct {
            entry.correct += 1;
        }
    }

    order
        .into_iter()
        .map(|code| {
            let mut result = by_code.remove(&code).unwrap_or(SkillResult {
                skill_code: code.clone(),
                skill_name: code,
                correct: 0,
                total: 0,
                percentage: 0.0,
            });
            result.percentage = if result.total > 0 {
                100.0 * result.correct as f64 / result.total as f64
            } else {
                0.0
            };
            result
        })
        .collect()
}

/// Splits a breakdown into gaps (below the gap threshold) and strengths
/// (at or above the strength threshold). Skills in between are neither.
pub fn gaps_and_strengths(breakdown: &[SkillResult], thresholds: &GapThresholds) -> GapsAndStrengths {
    let mut result = GapsAndStrengths::default();
    for skill in breakdown {
        if skill.percentage < thresholds.gap_below {
            result.gaps.push(skill.clone());
        } else if skill.percentage >= thresholds.strength_at {
            result.strengths.push(skill.clone());
        }
    }
    result
}

/// Urgency of closing a gap toward `target_score`.
pub fn gap_priority(current_score: f64, target_score: f64) -> GapPriority {
    let gap_size = (target_score - current_score).max(0.0);
    if gap_size >= 40.0 {
        GapPriority::Critical
    } else if gap_size >= 25.0 {
        GapPriority::High
    } else if gap_size >= 10.0 {
        GapPriority::Medium
    } else {
        GapPriority::Low
    }
}

/// Remediation list: weakest gaps first, capped at the configured count.
pub fn practice_recommendations(
    gaps: &[SkillResult],
    thresholds: &GapThresholds,
) -> Vec<PracticeRecommendation> {
    let mut ranked: Vec<&SkillResult> = gaps.iter().collect();
    ranked.sort_by(|a, b| {
        a.percentage
            .partial_cmp(&b.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let recommendations: Vec<PracticeRecommendation> = ranked
        .into_iter()
        .take(thresholds.max_recommendations)
        .map(|skill| PracticeRecommendation {
            kind: RecommendationKind::Practice,
            id: skill.skill_code.clone(),
            name: skill.skill_name.clone(),
            reason: format!(
                "Accuracy in {} is {:.0}%, below the {:.0}% target",
                skill.skill_name, skill.percentage, thresholds.target_score
            ),
        })
        .collect();

    tracing::debug!(
        gap_count = gaps.len(),
        emitted = recommendations.len(),
        "built practice recommendations"
    );
    recommendations
}

/// Estimated grade level in `0..=12`, one decimal place.
///
/// Each grade-tagged observation contributes its grade, weighted 1.0 when
/// answered correctly and 0.3 otherwise, so material the learner handles
/// pulls the estimate harder than material they miss. Overall accuracy
/// then nudges the weighted mean up or down half a grade (a full grade
/// when accuracy is under 50%). With no grade-tagged data the estimate
/// defaults to grade 5.
pub fn estimate_grade_level(observations: &[SkillObservation]) -> f64 {
    const CORRECT_WEIGHT: f64 = 1.0;
    const INCORRECT_WEIGHT: f64 = 0.3;
    const DEFAULT_GRADE: f64 = 5.0;

    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for obs in observations {
        if let Some(grade) = obs.grade_level {
            let weight = if obs.is_correct { CORRECT_WEIGHT } else { INCORRECT_WEIGHT };
            weighted_sum += grade * weight;
            weight_total += weight;
        }
    }

    let base = if weight_total > 0.0 {
        weighted_sum / weight_total
    } else {
        return DEFAULT_GRADE;
    };

    let correct = observations.iter().filter(|o| o.is_correct).count();
    let accuracy = if observations.is_empty() {
        0.0
    } else {
        correct as f64 / observations.len() as f64
    };

    let adjustment = if accuracy >= 0.9 {
        0.5
    } else if accuracy >= 0.7 {
        0.0
    } else if accuracy >= 0.5 {
        -0.5
    } else {
        -1.0
    };

    let estimate = (base + adjustment).clamp(0.0, 12.0);
    (estimate * 10.0).round() / 10.0
}
