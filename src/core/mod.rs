// Core algorithm exports
pub mod interpretation;
pub mod scoring;
pub mod sweep;
pub mod wizard;

pub use interpretation::{odds, probability, Interpretation, Verdict, GaugeBand};
pub use scoring::{evaluate, evaluate_collected};
pub use sweep::sweep_candidate_age;
pub use wizard::{Collected, Submission, WizardError, WizardState, WizardStep};
