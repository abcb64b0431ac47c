// Route exports
pub mod evaluation;
pub mod sessions;

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::ValidationErrors;

use crate::models::{AgeRange, ErrorResponse};
use crate::services::{SessionError, SessionStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub sweep_range: AgeRange,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(evaluation::configure)
            .configure(sessions::configure),
    );
}

pub(crate) fn validation_failed(errors: &ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: field_errors={:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

pub(crate) fn invalid_range(range: AgeRange) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid age range".to_string(),
        message: format!("minAge ({}) must not exceed maxAge ({})", range.min, range.max),
        status_code: 400,
    })
}

pub(crate) fn session_failed(err: SessionError) -> HttpResponse {
    match &err {
        SessionError::NotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Session not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        SessionError::Transition(_) => HttpResponse::Conflict().json(ErrorResponse {
            error: "Invalid wizard transition".to_string(),
            message: err.to_string(),
            status_code: 409,
        }),
    }
}
