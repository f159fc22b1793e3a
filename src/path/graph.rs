//! Prerequisite-graph traversal within a single learning path.
//!
//! A node is available once every prerequisite id is in the completed set
//! and the node itself is not. No cycle detection runs anywhere: nodes on
//! a prerequisite cycle simply never unlock, which is the intended policy
//! rather than a failure mode.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{LearningPath, LearningPathNode};

/// All nodes the learner can start right now, in path order.
pub fn available_nodes<'a>(
    path: &'a LearningPath,
    completed_ids: &HashSet<String>,
) -> Vec<&'a LearningPathNode> {
    path.nodes
        .iter()
        .filter(|node| {
            !completed_ids.contains(&node.id)
                && node.prerequisites.iter().all(|p| completed_ids.contains(p))
        })
        .collect()
}

/// Completion summary for one path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathProgress {
    /// 0..=100 over required nodes only; 100 when the path has none.
    pub completion_percentage: f64,
    pub required_remaining: usize,
    pub optional_remaining: usize,
    /// Time left over required, not-yet-completed nodes. Optional nodes
    /// are excluded from the estimate.
    pub estimated_minutes_remaining: i64,
}

pub fn path_progress(path: &LearningPath, completed_ids: &HashSet<String>) -> PathProgress {
    let required: Vec<&LearningPathNode> =
        path.nodes.iter().filter(|n| !n.is_optional).collect();
    let optional_total = path.nodes.len() - required.len();

    let completed_required = required
        .iter()
        .filter(|n| completed_ids.contains(&n.id))
        .count();
    let completed_optional = path
        .nodes
        .iter()
        .filter(|n| n.is_optional && completed_ids.contains(&n.id))
        .count();

    let completion_percentage = if required.is_empty() {
        100.0
    } else {
        100.0 * completed_required as f64 / required.len() as f64
    };

    let estimated_minutes_remaining = required
        .iter()
        .filter(|n| !completed_ids.contains(&n.id))
        .map(|n| n.estimated_minutes as i64)
        .sum();

    PathProgress {
        completion_percentage,
        required_remaining: required.len() - completed_required,
        optional_remaining: optional_total - completed_optional,
        estimated_minutes_remaining,
    }
}

/// Next node to study: required nodes always beat optional ones, then the
/// lowest `order` wins. `None` when the path is complete or every
/// remaining node is blocked by unmet (possibly cyclic) prerequisites.
pub fn next_recommended_node<'a>(
    path: &'a LearningPath,
    completed_ids: &HashSet<String>,
) -> Option<&'a LearningPathNode> {
    available_nodes(path, completed_ids)
        .into_iter()
        .min_by_key(|node| (node.is_optional, node.order))
}
