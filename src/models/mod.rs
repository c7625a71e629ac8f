// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{TargetProfile, CandidateProfile, MatchResult, RankedList, RankingMode};
pub use requests::RecommendRequest;
pub use responses::{RecommendResponse, HealthResponse, ErrorResponse};
