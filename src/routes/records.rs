use actix_web::{web, HttpResponse, Responder};
use crate::models::{CreateDonorRequest, CreateVictimRequest, CreatedResponse, OkResponse};
use crate::routes::{store_failure, AppState};

/// Configure victim, donor and reset routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/victims", web::post().to(add_victim))
        .route("/victims", web::get().to(list_victims))
        .route("/donors", web::post().to(add_donor))
        .route("/donors", web::get().to(list_donors))
        .route("/reset", web::delete().to(reset_all));
}

/// Register a victim
///
/// POST /api/victims
///
/// Request body (every field optional, loosely typed):
/// ```json
/// {
///   "name": "string",
///   "location": "string",
///   "need_type": "Food",
///   "urgency": "High|Medium|Low",
///   "income": 1000,
///   "has_home": "No",
///   "amount_needed": 200
/// }
/// ```
async fn add_victim(
    state: web::Data<AppState>,
    req: web::Json<CreateVictimRequest>,
) -> impl Responder {
    let victim = req.into_inner().into_new_victim();

    match state.store.insert_victim(&victim).await {
        Ok(id) => {
            tracing::info!("Registered victim {} needing {} ({})", id, victim.need_type, victim.urgency);
            HttpResponse::Ok().json(CreatedResponse { id, ok: true })
        }
        Err(e) => store_failure("Failed to record victim", e),
    }
}

/// Register a donor
///
/// POST /api/donors
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "location": "string",
///   "resource_type": "food",
///   "donation_amount": 500
/// }
/// ```
async fn add_donor(
    state: web::Data<AppState>,
    req: web::Json<CreateDonorRequest>,
) -> impl Responder {
    let donor = req.into_inner().into_new_donor();

    match state.store.insert_donor(&donor).await {
        Ok(id) => {
            tracing::info!("Registered donor {} offering {}", id, donor.resource_type);
            HttpResponse::Ok().json(CreatedResponse { id, ok: true })
        }
        Err(e) => store_failure("Failed to record donor", e),
    }
}

/// List victims, newest first
///
/// GET /api/victims
async fn list_victims(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_victims().await {
        Ok(mut victims) => {
            victims.reverse();
            HttpResponse::Ok().json(victims)
        }
        Err(e) => store_failure("Failed to list victims", e),
    }
}

/// List donors, newest first
///
/// GET /api/donors
async fn list_donors(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_donors().await {
        Ok(mut donors) => {
            donors.reverse();
            HttpResponse::Ok().json(donors)
        }
        Err(e) => store_failure("Failed to list donors", e),
    }
}

/// Delete all victims and donors
///
/// DELETE /api/reset
async fn reset_all(state: web::Data<AppState>) -> impl Responder {
    match state.store.reset().await {
        Ok(()) => {
            tracing::warn!("All victim and donor records were reset");
            HttpResponse::Ok().json(OkResponse { ok: true })
        }
        Err(e) => store_failure("Failed to reset records", e),
    }
}
