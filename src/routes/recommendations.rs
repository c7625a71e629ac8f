use actix_web::{web, HttpResponse, Responder};
use std::time::Duration;
use validator::Validate;
use crate::config::RankingSettings;
use crate::core::{Ranker, RankError};
use crate::models::{RecommendRequest, RecommendResponse, HealthResponse, ErrorResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
    pub ranking: RankingSettings,
}

impl AppState {
    /// The default top-N never exceeds `max_top_n`
    pub fn new(ranking: RankingSettings) -> Self {
        Self {
            ranker: Ranker::new(ranking.default_top_n.min(ranking.max_top_n)),
            ranking,
        }
    }
}

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend mentors endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "target_user": { "user_id": "string", "goals": ["string"] },
///   "candidates": [{ "user_id": "string", "name": "string", "skills": ["string"] }],
///   "top_n": 5
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let RecommendRequest { target_user, candidates, top_n } = req.into_inner();
    let total_candidates = candidates.len();

    if candidates.is_empty() {
        return HttpResponse::Ok().json(RecommendResponse {
            recommendations: vec![],
            ranked: true,
            total_candidates: 0,
        });
    }

    // Cap top_n to keep responses bounded
    let max_top_n = i64::try_from(state.ranking.max_top_n).unwrap_or(i64::MAX);
    let top_n = top_n.map(|n| n.min(max_top_n));
    let user_id = target_user.user_id.clone();

    tracing::info!(
        "Ranking {} candidates for user: {}, top_n: {:?}",
        total_candidates,
        user_id,
        top_n
    );

    let ranker = state.ranker;
    let budget = Duration::from_millis(state.ranking.timeout_ms);
    let outcome = tokio::time::timeout(
        budget,
        web::block(move || ranker.rank(&target_user, &candidates, top_n)),
    )
    .await;

    match outcome {
        Ok(Ok(Ok(list))) => {
            tracing::info!(
                "Returning {} recommendations for user {} (ranked: {})",
                list.len(),
                user_id,
                list.is_ranked()
            );
            HttpResponse::Ok().json(RecommendResponse::from_ranked(list, total_candidates))
        }
        Ok(Ok(Err(RankError::ScoringFailure(message)))) => {
            tracing::error!("Scoring failed for {}: {}", user_id, message);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Scoring failed".to_string(),
                message,
                status_code: 500,
            })
        }
        Ok(Err(e)) => {
            tracing::error!("Ranking task for {} did not complete: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Scoring failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
        Err(_) => {
            tracing::error!("Ranking for {} exceeded {}ms", user_id, budget.as_millis());
            HttpResponse::GatewayTimeout().json(ErrorResponse {
                error: "Ranking timed out".to_string(),
                message: format!("ranking did not finish within {}ms", budget.as_millis()),
                status_code: 504,
            })
        }
    }
}
