//! Mentor Match - TF-IDF mentor recommendation service
//!
//! Ranks candidate mentors for a learner by the textual overlap between the
//! learner's goals and each candidate's skills.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Ranker, RankError, TfidfVectorizer, cosine_similarity};
pub use crate::models::{TargetProfile, CandidateProfile, MatchResult, RankedList, RankingMode, RecommendRequest, RecommendResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let ranker = Ranker::default();
        let list = ranker
            .rank(&TargetProfile::default(), &[], None)
            .expect("empty input should rank");
        assert!(list.is_empty());
    }
}
