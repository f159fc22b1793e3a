//! Whole-path recommendation.
//!
//! Scores each candidate path against a learner profile and returns the
//! best matches with a readable reason, prerequisite status, and a rough
//! completion estimate. Weights live in [`RecommenderWeights`]; any
//! non-negative setting keeps the ordering contracts (closer grade scores
//! higher, more satisfied prerequisites score higher, matching interests
//! never lower a score).

use serde::{Deserialize, Serialize};

use crate::config::RecommenderWeights;
use crate::error::EngineError;
use crate::types::{LearnerProfile, LearningPath};

/// Match score for one path. Higher is better; the scale is relative, not
/// a percentage.
pub fn path_match_score(
    path: &LearningPath,
    profile: &LearnerProfile,
    weights: &RecommenderWeights,
) -> f64 {
    let grade_distance = (path.grade_level - profile.grade_level).abs() as f64;
    let grade_term = (weights.grade_weight - grade_distance * weights.grade_falloff).max(0.0);

    let prerequisite_term = if path.prerequisites.is_empty() {
        weights.prerequisite_weight
    } else {
        let satisfied = path
            .prerequisites
            .iter()
            .filter(|p| profile.completed_paths.contains(*p))
            .count();
        weights.prerequisite_weight * satisfied as f64 / path.prerequisites.len() as f64
    };

    let interest_term = if path.outcomes.iter().any(|o| profile.interests.contains(o)) {
        weights.interest_bonus
    } else {
        0.0
    };

    grade_term + prerequisite_term + interest_term
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisiteStatus {
    pub path_id: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathRecommendation {
    pub path_id: String,
    pub title: String,
    pub match_score: f64,
    pub prerequisites: Vec<PrerequisiteStatus>,
    pub reason: String,
    pub estimated_completion: String,
}

/// Ranks candidate paths for a learner.
///
/// Completed and inactive paths are excluded before scoring. Ties keep the
/// input order. `limit` must be at least 1.
pub fn recommend_paths(
    paths: &[LearningPath],
    profile: &LearnerProfile,
    limit: usize,
    weights: &RecommenderWeights,
) -> Result<Vec<PathRecommendation>, EngineError> {
    if limit == 0 {
        return Err(EngineError::InvalidLimit);
    }

    let mut scored: Vec<(&LearningPath, f64)> = paths
        .iter()
        .filter(|path| path.is_active && !profile.completed_paths.contains(&path.id))
        .map(|path| (path, path_match_score(path, profile, weights)))
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let recommendations: Vec<PathRecommendation> = scored
        .into_iter()
        .take(limit)
        .map(|(path, score)| build_recommendation(path, profile, score))
        .collect();

    tracing::debug!(
        candidates = paths.len(),
        emitted = recommendations.len(),
        "ranked learning paths"
    );
    Ok(recommendations)
}

fn build_recommendation(
    path: &LearningPath,
    profile: &LearnerProfile,
    match_score: f64,
) -> PathRecommendation {
    let prerequisites: Vec<PrerequisiteStatus> = path
        .prerequisites
        .iter()
        .map(|p| PrerequisiteStatus {
            path_id: p.clone(),
            completed: profile.completed_paths.contains(p),
        })
        .collect();

    PathRecommendation {
        path_id: path.id.clone(),
        title: path.title.clone(),
        match_score,
        reason: build_reason(path, profile, &prerequisites),
        estimated_completion: estimated_completion(path.estimated_hours()),
        prerequisites,
    }
}

fn build_reason(
    path: &LearningPath,
    profile: &LearnerProfile,
    prerequisites: &[PrerequisiteStatus],
) -> String {
    let mut parts: Vec<String> = Vec::new();

    let grade_distance = (path.grade_level - profile.grade_level).abs();
    if grade_distance == 0 {
        parts.push(format!("matches grade {}", profile.grade_level));
    } else if grade_distance == 1 {
        parts.push(format!("close to grade {}", profile.grade_level));
    }

    if path.outcomes.iter().any(|o| profile.interests.contains(o)) {
        parts.push("covers your interests".to_string());
    }

    let missing = prerequisites.iter().filter(|p| !p.completed).count();
    if prerequisites.is_empty() || missing == 0 {
        parts.push("ready to start".to_string());
    } else {
        parts.push(format!(
            "{missing} prerequisite{} still to finish",
            if missing == 1 { "" } else { "s" }
        ));
    }

    if parts.is_empty() {
        format!("Broadens your skills beyond grade {}", profile.grade_level)
    } else {
        let mut reason = parts.join(", ");
        if let Some(first) = reason.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        reason
    }
}

fn estimated_completion(hours: i64) -> String {
    match hours {
        h if h <= 0 => "under an hour".to_string(),
        1 => "about 1 hour".to_string(),
        h => format!("about {h} hours"),
    }
}
