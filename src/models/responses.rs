use serde::{Deserialize, Serialize};

use crate::core::interpretation::Interpretation;
use crate::core::wizard::{Collected, WizardState, WizardStep};
use crate::models::domain::{AgeRange, EvaluationResult, SweepPoint};

/// Response for the evaluate endpoint and the wizard dashboard
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResponse {
    #[serde(flatten)]
    pub result: EvaluationResult,
    pub interpretation: Interpretation,
}

impl EvaluationResponse {
    pub fn new(result: EvaluationResult) -> Self {
        let interpretation = Interpretation::from_result(&result);
        Self {
            result,
            interpretation,
        }
    }
}

/// Response for sweep endpoints
#[derive(Debug, Clone, Serialize)]
pub struct SweepResponse {
    pub range: AgeRange,
    pub points: Vec<SweepPoint>,
}

/// Current view of a wizard session
#[derive(Debug, Clone, Serialize)]
pub struct WizardResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub step: WizardStep,
    #[serde(rename = "stepNumber")]
    pub step_number: u8,
    #[serde(rename = "stepLabel")]
    pub step_label: &'static str,
    pub progress: f64,
    pub collected: Collected,
    pub evaluation: Option<EvaluationResponse>,
}

impl WizardResponse {
    pub fn from_state(session_id: impl Into<String>, state: &WizardState) -> Self {
        let step = state.step();
        Self {
            session_id: session_id.into(),
            step,
            step_number: step.number(),
            step_label: step.label(),
            progress: state.progress(),
            collected: state.collected().clone(),
            evaluation: state.evaluation().cloned().map(EvaluationResponse::new),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "activeSessions")]
    pub active_sessions: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Session deletion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDeletedResponse {
    pub success: bool,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}
