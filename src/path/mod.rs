//! Learning-path traversal and recommendation.

pub mod graph;
pub mod recommend;

pub use graph::{available_nodes, next_recommended_node, path_progress, PathProgress};
pub use recommend::{
    path_match_score, recommend_paths, PathRecommendation, PrerequisiteStatus,
};
