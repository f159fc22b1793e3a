use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    FillBlank,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::TrueFalse => "true_false",
            Self::ShortAnswer => "short_answer",
            Self::FillBlank => "fill_blank",
        }
    }

    pub fn parse(s: &str) -> Result<Self, EngineError> {
        match s {
            "multiple_choice" => Ok(Self::MultipleChoice),
            "true_false" => Ok(Self::TrueFalse),
            "short_answer" => Ok(Self::ShortAnswer),
            "fill_blank" => Ok(Self::FillBlank),
            other => Err(EngineError::UnknownItemType(other.to_string())),
        }
    }

    /// Free-text types are graded with typo tolerance; choice types exactly.
    pub fn is_free_text(&self) -> bool {
        matches!(self, Self::ShortAnswer | Self::FillBlank)
    }
}

/// Item difficulty on the 1..=10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(1);
    pub const MID: Difficulty = Difficulty(5);
    pub const MAX: Difficulty = Difficulty(10);

    pub fn new(value: u8) -> Result<Self, EngineError> {
        if (1..=10).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EngineError::InvalidDifficulty(value as i64))
        }
    }

    /// Clamps into 1..=10. Only for values the engine itself derives;
    /// caller-supplied difficulties go through [`Difficulty::new`].
    pub(crate) fn clamped(value: i64) -> Self {
        Self(value.clamp(1, 10) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn distance(&self, other: Difficulty) -> u8 {
        self.0.abs_diff(other.0)
    }

    pub fn category(&self) -> DifficultyCategory {
        DifficultyCategory::from_number(*self)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Coarse difficulty labels used at the UI boundary.
///
/// `to_number` / `from_number` round-trip for the four canonical values:
/// easy=2, medium=5, hard=7, expert=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyCategory {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl DifficultyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }

    pub fn to_number(&self) -> Difficulty {
        match self {
            Self::Easy => Difficulty(2),
            Self::Medium => Difficulty(5),
            Self::Hard => Difficulty(7),
            Self::Expert => Difficulty(9),
        }
    }

    pub fn from_number(difficulty: Difficulty) -> Self {
        match difficulty.value() {
            1..=2 => Self::Easy,
            3..=5 => Self::Medium,
            6..=7 => Self::Hard,
            _ => Self::Expert,
        }
    }
}

/// SM-2 response quality, the sole input to the scheduler.
///
/// 0..=2 are failures, 3..=5 successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ResponseQuality {
    Blackout = 0,
    Wrong = 1,
    Familiar = 2,
    Difficult = 3,
    Hesitant = 4,
    Perfect = 5,
}

impl ResponseQuality {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn is_success(&self) -> bool {
        self.as_u8() >= 3
    }
}

impl TryFrom<u8> for ResponseQuality {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Blackout),
            1 => Ok(Self::Wrong),
            2 => Ok(Self::Familiar),
            3 => Ok(Self::Difficult),
            4 => Ok(Self::Hesitant),
            5 => Ok(Self::Perfect),
            other => Err(EngineError::InvalidQuality(other as i64)),
        }
    }
}

impl From<ResponseQuality> for u8 {
    fn from(q: ResponseQuality) -> u8 {
        q.as_u8()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Trend {
    Improving,
    #[default]
    Stable,
    Declining,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "improving" => Self::Improving,
            "declining" => Self::Declining,
            _ => Self::Stable,
        }
    }
}

/// Six ordered mastery labels derived from a 0..=100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasteryLevel {
    Novice,
    Beginner,
    Intermediate,
    Proficient,
    Expert,
    Master,
}

impl MasteryLevel {
    pub const ALL: [MasteryLevel; 6] = [
        Self::Novice,
        Self::Beginner,
        Self::Intermediate,
        Self::Proficient,
        Self::Expert,
        Self::Master,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Proficient => "proficient",
            Self::Expert => "expert",
            Self::Master => "master",
        }
    }

    pub fn next(&self) -> Option<MasteryLevel> {
        match self {
            Self::Novice => Some(Self::Beginner),
            Self::Beginner => Some(Self::Intermediate),
            Self::Intermediate => Some(Self::Proficient),
            Self::Proficient => Some(Self::Expert),
            Self::Expert => Some(Self::Master),
            Self::Master => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl GapPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// A gradeable question/exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub correct_answer: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub difficulty: Difficulty,
    pub points: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_code: Option<String>,
}

/// One graded submission. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEvent {
    pub item_id: String,
    pub submitted_answer: String,
    pub is_correct: bool,
    pub time_spent_ms: i64,
    pub difficulty: Difficulty,
    pub timestamp: i64,
}

/// Minimal (correct, difficulty) pair consumed by the adaptive selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseOutcome {
    pub is_correct: bool,
    pub difficulty: Difficulty,
}

impl From<&ResponseEvent> for ResponseOutcome {
    fn from(event: &ResponseEvent) -> Self {
        Self {
            is_correct: event.is_correct,
            difficulty: event.difficulty,
        }
    }
}

/// A single step in a learning path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathNode {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub order: i32,
    pub estimated_minutes: i32,
    pub points_value: i32,
    #[serde(default)]
    pub prerequisites: HashSet<String>,
    #[serde(default)]
    pub is_optional: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub nodes: Vec<LearningPathNode>,
    /// Other path ids that should be completed before this one.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Outcome tags, matched against learner interests.
    #[serde(default)]
    pub outcomes: Vec<String>,
    pub difficulty: DifficultyCategory,
    pub grade_level: i32,
    pub is_active: bool,
}

impl LearningPath {
    /// Total required study time, in hours rounded up.
    pub fn estimated_hours(&self) -> i64 {
        let minutes: i64 = self.nodes.iter().map(|n| n.estimated_minutes as i64).sum();
        (minutes + 59) / 60
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub grade_level: i32,
    #[serde(default)]
    pub completed_paths: HashSet<String>,
    #[serde(default)]
    pub interests: HashSet<String>,
    #[serde(default)]
    pub current_mastery: HashMap<String, f64>,
}
