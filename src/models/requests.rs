use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateProfile, TargetProfile};

/// Request to recommend mentors for a learner
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(nested)]
    #[serde(alias = "targetUser")]
    pub target_user: TargetProfile,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    #[serde(default, alias = "topN")]
    pub top_n: Option<i64>,
}
