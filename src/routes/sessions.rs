use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::sweep_candidate_age;
use crate::models::{
    CandidateProfile, ErrorResponse, MissionResults, SessionDeletedResponse, SweepQuery,
    SweepResponse, UserProfile, WizardResponse,
};
use crate::routes::{invalid_range, session_failed, validation_failed, AppState};

/// Configure wizard session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::get().to(get_session))
        .route("/sessions/{id}", web::delete().to(delete_session))
        .route("/sessions/{id}/operator", web::post().to(submit_operator))
        .route("/sessions/{id}/subject", web::post().to(submit_subject))
        .route("/sessions/{id}/field-ops", web::post().to(submit_field_ops))
        .route("/sessions/{id}/reset", web::post().to(reset_session))
        .route("/sessions/{id}/sweep", web::get().to(sweep_session));
}

/// Start a wizard session
///
/// POST /api/v1/sessions
async fn create_session(state: web::Data<AppState>) -> impl Responder {
    let (id, wizard) = state.sessions.create().await;

    tracing::info!("Started wizard session {}", id);

    HttpResponse::Created().json(WizardResponse::from_state(id, &wizard))
}

/// Get the current phase and collected inputs of a session
///
/// GET /api/v1/sessions/{id}
async fn get_session(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.sessions.get(&id).await {
        Ok(wizard) => HttpResponse::Ok().json(WizardResponse::from_state(id, &wizard)),
        Err(e) => session_failed(e),
    }
}

/// Phase 1: operator calibration
///
/// POST /api/v1/sessions/{id}/operator
///
/// Request body:
/// ```json
/// { "age": 30, "income": 2400, "goal": "Family/Kids" }
/// ```
async fn submit_operator(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UserProfile>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let id = path.into_inner();
    let user = req.into_inner();

    match state.sessions.apply(&id, |wizard| wizard.submit_operator(user)).await {
        Ok(wizard) => HttpResponse::Ok().json(WizardResponse::from_state(id, &wizard)),
        Err(e) => {
            tracing::info!("Operator submission rejected for {}: {}", id, e);
            session_failed(e)
        }
    }
}

/// Phase 2: subject data
///
/// POST /api/v1/sessions/{id}/subject
///
/// Request body:
/// ```json
/// { "name": "string", "age": 28, "hasKids": false }
/// ```
async fn submit_subject(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<CandidateProfile>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let id = path.into_inner();
    let candidate = req.into_inner();

    match state.sessions.apply(&id, |wizard| wizard.submit_subject(candidate)).await {
        Ok(wizard) => HttpResponse::Ok().json(WizardResponse::from_state(id, &wizard)),
        Err(e) => {
            tracing::info!("Subject submission rejected for {}: {}", id, e);
            session_failed(e)
        }
    }
}

/// Phase 3: field operation results, which produces the dashboard
///
/// POST /api/v1/sessions/{id}/field-ops
///
/// Request body:
/// ```json
/// {
///   "boundaryTestOutcome": "calm acceptance",
///   "intellectualTestOutcome": "asked with interest",
///   "exPartnerNarrative": "string"
/// }
/// ```
async fn submit_field_ops(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<MissionResults>,
) -> impl Responder {
    let id = path.into_inner();
    let missions = req.into_inner();

    match state.sessions.apply(&id, |wizard| wizard.submit_field_ops(missions)).await {
        Ok(wizard) => {
            if let Some(result) = wizard.evaluation() {
                tracing::info!("Session {} reached dashboard: total={}", id, result.total);
            }
            HttpResponse::Ok().json(WizardResponse::from_state(id, &wizard))
        }
        Err(e) => {
            tracing::info!("Field ops submission rejected for {}: {}", id, e);
            session_failed(e)
        }
    }
}

/// Reset a session back to phase 1
///
/// POST /api/v1/sessions/{id}/reset
async fn reset_session(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.sessions.reset(&id).await {
        Ok(wizard) => {
            tracing::info!("Session {} reset", id);
            HttpResponse::Ok().json(WizardResponse::from_state(id, &wizard))
        }
        Err(e) => session_failed(e),
    }
}

/// Sweep the candidate age over a completed session
///
/// GET /api/v1/sessions/{id}/sweep?minAge={minAge}&maxAge={maxAge}
async fn sweep_session(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<SweepQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(&errors);
    }

    let id = path.into_inner();
    let wizard = match state.sessions.get(&id).await {
        Ok(wizard) => wizard,
        Err(e) => return session_failed(e),
    };

    let inputs = match wizard.collected().complete() {
        Some(inputs) => inputs,
        None => {
            return HttpResponse::Conflict().json(ErrorResponse {
                error: "Session incomplete".to_string(),
                message: format!(
                    "Sweep requires the dashboard step, session is at step {}",
                    wizard.step().number()
                ),
                status_code: 409,
            });
        }
    };

    let range = query.range(state.sweep_range);
    if range.is_empty() {
        return invalid_range(range);
    }

    let points = sweep_candidate_age(&inputs, range);

    tracing::debug!("Session {} sweep produced {} points", id, points.len());

    HttpResponse::Ok().json(SweepResponse { range, points })
}

/// Drop a session
///
/// DELETE /api/v1/sessions/{id}
async fn delete_session(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.sessions.remove(&id).await {
        Ok(()) => HttpResponse::Ok().json(SessionDeletedResponse {
            success: true,
            session_id: id,
        }),
        Err(e) => session_failed(e),
    }
}
