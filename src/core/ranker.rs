use thiserror::Error;
use crate::models::{CandidateProfile, MatchResult, RankedList, RankingMode, TargetProfile};
use crate::core::{
    similarity::{cosine_similarity, round_score},
    text::{is_blank, join_terms},
    tfidf::TfidfVectorizer,
};

pub const DEFAULT_TOP_N: usize = 5;

/// Errors that can occur while ranking
#[derive(Debug, Error)]
pub enum RankError {
    #[error("Scoring failed: {0}")]
    ScoringFailure(String),
}

/// Resolve a requested top-N against the default
///
/// Values below 1 are clamped to 1 rather than rejected.
pub fn resolve_top_n(requested: Option<i64>, default: usize) -> usize {
    match requested {
        None => default.max(1),
        Some(n) if n < 1 => {
            tracing::warn!("Requested top_n {} is below 1, clamping to 1", n);
            1
        }
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    }
}

/// Mentor ranking engine
///
/// Scores every candidate's skills against the target's goals using TF-IDF
/// vectors fitted jointly on the target and all candidates, then returns the
/// best `top_n` by cosine similarity.
///
/// # Pipeline
/// 1. Empty candidate list short-circuit
/// 2. No-goal fallback (input order, unscored)
/// 3. Joint corpus vectorization
/// 4. Cosine scoring, stable sort and truncation
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    default_top_n: usize,
}

impl Ranker {
    pub fn new(default_top_n: usize) -> Self {
        Self {
            default_top_n: default_top_n.max(1),
        }
    }

    /// Rank `candidates` for `target`
    ///
    /// # Arguments
    /// * `target` - The learner and their goals
    /// * `candidates` - Potential mentors, in caller order
    /// * `top_n` - Maximum results; `None` uses the configured default
    ///
    /// # Returns
    /// A `RankedList` in `Scored` mode, or in `Fallback` mode (no scores)
    /// when the target has no goal text.
    ///
    /// Scores are rounded to 4 decimals before sorting, so candidates whose
    /// similarities differ only past the 4th decimal keep input order.
    pub fn rank(
        &self,
        target: &TargetProfile,
        candidates: &[CandidateProfile],
        top_n: Option<i64>,
    ) -> Result<RankedList, RankError> {
        if candidates.is_empty() {
            return Ok(RankedList::empty());
        }

        let top_n = resolve_top_n(top_n, self.default_top_n);
        let goals_text = join_terms(&target.goals);

        if is_blank(&goals_text) {
            tracing::debug!(
                "Target {} has no goals, returning first {} candidates unscored",
                target.user_id,
                top_n
            );
            return Ok(fallback(candidates, top_n));
        }

        let skills_texts: Vec<String> = candidates
            .iter()
            .map(|c| join_terms(&c.skills))
            .collect();

        // Target first, then candidates in input order
        let mut corpus = Vec::with_capacity(candidates.len() + 1);
        corpus.push(goals_text.as_str());
        corpus.extend(skills_texts.iter().map(String::as_str));

        let mut vectorizer = TfidfVectorizer::new();
        let rows = vectorizer.fit_transform(&corpus)?;

        if rows.len() != corpus.len() {
            return Err(RankError::ScoringFailure(format!(
                "expected {} vectors, got {}",
                corpus.len(),
                rows.len()
            )));
        }

        let (target_vector, candidate_vectors) = rows.split_at(1);
        let target_vector = &target_vector[0];

        let mut scored: Vec<MatchResult> = Vec::with_capacity(candidates.len());
        for ((candidate, skills_text), vector) in candidates
            .iter()
            .zip(skills_texts)
            .zip(candidate_vectors)
        {
            let similarity = cosine_similarity(target_vector, vector);
            if !similarity.is_finite() {
                return Err(RankError::ScoringFailure(format!(
                    "non-finite similarity for candidate {}",
                    candidate.user_id
                )));
            }

            scored.push(MatchResult {
                user_id: candidate.user_id.clone(),
                name: candidate.name.clone(),
                score: Some(round_score(similarity)),
                matched_skills: skills_text,
                skills: None,
            });
        }

        // Stable: equal scores keep input order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_n);

        tracing::debug!(
            "Ranked {} candidates for {} over {} terms, returning {}",
            candidates.len(),
            target.user_id,
            vectorizer.vocabulary().len(),
            scored.len()
        );

        Ok(RankedList {
            mode: RankingMode::Scored,
            results: scored,
        })
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

fn fallback(candidates: &[CandidateProfile], top_n: usize) -> RankedList {
    let results = candidates
        .iter()
        .take(top_n)
        .map(|c| MatchResult {
            user_id: c.user_id.clone(),
            name: c.name.clone(),
            score: None,
            matched_skills: join_terms(&c.skills),
            skills: Some(c.skills.clone()),
        })
        .collect();

    RankedList {
        mode: RankingMode::Fallback,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, skills: &[&str]) -> CandidateProfile {
        CandidateProfile::new(
            id,
            format!("User {}", id),
            skills.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn target(goals: &[&str]) -> TargetProfile {
        TargetProfile::new("learner", goals.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_resolve_top_n() {
        assert_eq!(resolve_top_n(None, 5), 5);
        assert_eq!(resolve_top_n(Some(3), 5), 3);
        assert_eq!(resolve_top_n(Some(0), 5), 1);
        assert_eq!(resolve_top_n(Some(-7), 5), 1);
    }

    #[test]
    fn test_empty_candidates() {
        let ranker = Ranker::default();
        let result = ranker.rank(&target(&["python"]), &[], Some(3)).unwrap();
        assert!(result.is_empty());
        assert!(result.is_ranked());
    }

    #[test]
    fn test_whitespace_goals_use_fallback() {
        let ranker = Ranker::default();
        let candidates = vec![candidate("x", &["rust"]), candidate("y", &[])];
        let result = ranker.rank(&target(&["  ", ""]), &candidates, Some(5)).unwrap();

        assert_eq!(result.mode, RankingMode::Fallback);
        assert_eq!(result.len(), 2);
        assert!(result.results.iter().all(|r| r.score.is_none()));
    }

    #[test]
    fn test_fallback_echoes_skill_lists() {
        let ranker = Ranker::default();
        let candidates = vec![
            candidate("x", &["machine learning", "python"]),
            candidate("y", &["machine", "learning python"]),
        ];
        let result = ranker.rank(&target(&[]), &candidates, None).unwrap();

        for (out, input) in result.results.iter().zip(&candidates) {
            assert_eq!(out.skills.as_ref(), Some(&input.skills));
        }
        assert_ne!(result.results[0].skills, result.results[1].skills);
    }

    #[test]
    fn test_python_learner_prefers_bob() {
        let ranker = Ranker::default();
        let candidates = vec![
            candidate("a", &["python", "django"]),
            candidate("b", &["machine learning", "python", "statistics"]),
        ];
        let result = ranker
            .rank(&target(&["python", "machine learning"]), &candidates, Some(2))
            .unwrap();

        assert_eq!(result.results[0].user_id, "b");
        assert_eq!(result.results[1].user_id, "a");
        // Hand-computed from the smoothed IDF weights
        assert_eq!(result.results[0].score, Some(0.7752));
        assert_eq!(result.results[1].score, Some(0.2448));
    }

    #[test]
    fn test_empty_skills_score_zero() {
        let ranker = Ranker::default();
        let candidates = vec![candidate("empty", &[]), candidate("rust", &["rust"])];
        let result = ranker.rank(&target(&["rust"]), &candidates, None).unwrap();

        assert_eq!(result.results[0].user_id, "rust");
        assert_eq!(result.results[1].score, Some(0.0));
        assert_eq!(result.results[1].matched_skills, "");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranker = Ranker::default();
        let candidates = vec![
            candidate("1", &["cooking"]),
            candidate("2", &["rust"]),
            candidate("3", &["painting"]),
            candidate("4", &["rust"]),
        ];
        let result = ranker.rank(&target(&["rust"]), &candidates, Some(4)).unwrap();

        let ids: Vec<&str> = result.results.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "1", "3"]);
    }
}
