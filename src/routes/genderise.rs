use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{GenderiseRequest, TitleRequest, GenderiseResponse, TitleResponse, HealthResponse, ErrorResponse};
use crate::services::GenderizeClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub genderize: Arc<GenderizeClient>,
}

/// Configure all lookup routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/genderise", web::post().to(genderise))
        .route("/title", web::post().to(guess_title));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Genderise endpoint
///
/// POST /api/v1/genderise
///
/// Request body:
/// ```json
/// {
///   "names": ["string"],
///   "countryId": "GB",
///   "apiKey": "string"
/// }
/// ```
///
/// Always answers 200. Lookup failures produce an empty `results` list.
async fn genderise(
    state: web::Data<AppState>,
    req: web::Json<GenderiseRequest>,
) -> impl Responder {
    let req = req.into_inner();

    tracing::info!("Genderising {} names", req.names.len());

    let results = state
        .genderize
        .genderise(req.names.as_slice(), req.country_id.as_deref(), req.api_key.as_deref())
        .await;

    HttpResponse::Ok().json(GenderiseResponse { results })
}

/// Title endpoint
///
/// POST /api/v1/title
///
/// Request body:
/// ```json
/// { "firstName": "string" }
/// ```
async fn guess_title(
    state: web::Data<AppState>,
    req: web::Json<TitleRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for title request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let title = state.genderize.guess_title(&req.first_name).await;

    tracing::debug!("Guessed title {} for {}", title, req.first_name);

    HttpResponse::Ok().json(TitleResponse {
        first_name: req.into_inner().first_name,
        title,
    })
}
