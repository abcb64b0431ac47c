use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{evaluate_collected, sweep_candidate_age};
use crate::models::{CollectedInputs, EvaluationResponse, HealthResponse, SweepRequest, SweepResponse};
use crate::routes::{invalid_range, validation_failed, AppState};

/// Configure stateless scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/evaluate", web::post().to(evaluate))
        .route("/sweep", web::post().to(sweep));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        active_sessions: state.sessions.stats().active_sessions,
        timestamp: chrono::Utc::now(),
    })
}

/// Evaluate endpoint
///
/// POST /api/v1/evaluate
///
/// Request body:
/// ```json
/// {
///   "user": { "age": 30, "income": 2400, "goal": "Family/Kids" },
///   "candidate": { "name": "string", "age": 28, "hasKids": false },
///   "missions": {
///     "boundaryTestOutcome": "calm acceptance",
///     "intellectualTestOutcome": "asked with interest",
///     "exPartnerNarrative": "string"
///   }
/// }
/// ```
async fn evaluate(req: web::Json<CollectedInputs>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let result = evaluate_collected(&req);

    tracing::info!(
        "Evaluated inputs: total={}, goal={}",
        result.total,
        req.user.goal.label()
    );

    HttpResponse::Ok().json(EvaluationResponse::new(result))
}

/// Sensitivity sweep endpoint
///
/// POST /api/v1/sweep
///
/// Request body:
/// ```json
/// {
///   "inputs": { "user": {...}, "candidate": {...}, "missions": {...} },
///   "minAge": 18,
///   "maxAge": 45
/// }
/// ```
async fn sweep(state: web::Data<AppState>, req: web::Json<SweepRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let range = req.range(state.sweep_range);
    if range.is_empty() {
        return invalid_range(range);
    }

    let points = sweep_candidate_age(&req.inputs, range);

    tracing::info!("Swept candidate age {}..={} ({} points)", range.min, range.max, points.len());

    HttpResponse::Ok().json(SweepResponse { range, points })
}
