//! Love Algo - deterministic compatibility scoring
//!
//! This library provides the scoring engine, the candidate age sensitivity
//! sweep and the four phase intake wizard that feeds them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{evaluate, evaluate_collected, sweep_candidate_age, Interpretation, WizardState, WizardStep};
pub use crate::models::{CandidateProfile, CollectedInputs, EvaluationResult, MissionResults, SweepPoint, UserProfile};
