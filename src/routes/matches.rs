use actix_web::{web, HttpResponse, Responder};
use crate::models::HealthResponse;
use crate::routes::{store_failure, AppState};

/// Configure match and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches", web::get().to(compute_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = match state.store.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Store health check failed: {}", e);
            false
        }
    };

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Compute matches endpoint
///
/// GET /api/matches
///
/// Pairs every victim with the first donor of the needed resource type who
/// can cover the amount, and returns the pairs ordered by need score:
/// ```json
/// [
///   {
///     "victim": { "id": 1, "need_type": "Food", "need_score": 31.02, ... },
///     "donor": { "id": 1, "resource_type": "food", "donation_amount": 500, ... }
///   }
/// ]
/// ```
async fn compute_matches(state: web::Data<AppState>) -> impl Responder {
    let victims = match state.store.list_victims().await {
        Ok(victims) => victims,
        Err(e) => return store_failure("Failed to load victims", e),
    };

    let donors = match state.store.list_donors().await {
        Ok(donors) => donors,
        Err(e) => return store_failure("Failed to load donors", e),
    };

    let result = state.matcher.find_matches(&victims, &donors);

    tracing::info!(
        "Returning {} matches (from {} victims, {} donors)",
        result.matches.len(),
        result.total_victims,
        result.total_donors
    );

    HttpResponse::Ok().json(result.matches)
}
