use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, RankedList};

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<MatchResult>,
    /// `false` when the fallback path returned candidates unscored
    pub ranked: bool,
    pub total_candidates: usize,
}

impl RecommendResponse {
    pub fn from_ranked(list: RankedList, total_candidates: usize) -> Self {
        Self {
            ranked: list.is_ranked(),
            recommendations: list.results,
            total_candidates,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
