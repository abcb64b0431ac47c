// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeRange, BoundaryOutcome, CandidateProfile, CollectedInputs, Dimension, DimensionScore,
    EvaluationResult, Goal, IntellectualOutcome, MissionResults, Odds, Reason, ScoreBreakdown,
    Severity, SweepPoint, UserProfile,
};
pub use requests::{SweepQuery, SweepRequest};
pub use responses::{
    ErrorResponse, EvaluationResponse, HealthResponse, SessionDeletedResponse, SweepResponse,
    WizardResponse,
};
