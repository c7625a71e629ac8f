use serde::{Deserialize, Serialize};
use validator::Validate;

/// The learner a recommendation is computed for
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TargetProfile {
    #[validate(length(min = 1))]
    #[serde(alias = "userId")]
    pub user_id: String,
    /// Skills the learner wants to acquire, in the order they were listed
    #[serde(default)]
    pub goals: Vec<String>,
}

impl TargetProfile {
    pub fn new(user_id: impl Into<String>, goals: Vec<String>) -> Self {
        Self {
            user_id: user_id.into(),
            goals,
        }
    }
}

/// A potential mentor
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CandidateProfile {
    #[validate(length(min = 1))]
    #[serde(alias = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    /// Skills this candidate teaches
    #[serde(default)]
    pub skills: Vec<String>,
}

impl CandidateProfile {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>, skills: Vec<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            skills,
        }
    }
}

/// One recommended candidate
///
/// `score` is `None` only on the fallback path, where no similarity was
/// computed. A scored result with no overlap carries `Some(0.0)`.
/// `skills` is set only on the fallback path and echoes the candidate's
/// skill list as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(alias = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// The skills text that was scored
    #[serde(alias = "matchedSkills")]
    pub matched_skills: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// How a ranked list was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Ordered by TF-IDF cosine similarity
    Scored,
    /// Target had no goals; candidates returned in input order, unscored
    Fallback,
}

/// Ordered recommendations, at most `top_n` long
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedList {
    pub mode: RankingMode,
    pub results: Vec<MatchResult>,
}

impl RankedList {
    pub fn empty() -> Self {
        Self {
            mode: RankingMode::Scored,
            results: Vec::new(),
        }
    }

    pub fn is_ranked(&self) -> bool {
        self.mode == RankingMode::Scored
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
