use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::scoring::evaluate_collected;
use crate::models::{
    CandidateProfile, CollectedInputs, EvaluationResult, MissionResults, UserProfile,
};

/// Intake phases, in the order they are collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Operator,
    Subject,
    FieldOps,
    Dashboard,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 4] {
        [Self::Operator, Self::Subject, Self::FieldOps, Self::Dashboard]
    }

    /// 1-based position of the step
    pub const fn number(self) -> u8 {
        match self {
            Self::Operator => 1,
            Self::Subject => 2,
            Self::FieldOps => 3,
            Self::Dashboard => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Operator => "Phase 1: Operator Calibration",
            Self::Subject => "Phase 2: Subject Data",
            Self::FieldOps => "Phase 3: Field Operations Input",
            Self::Dashboard => "Dashboard",
        }
    }
}

/// Which form was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Submission {
    Operator,
    Subject,
    FieldOps,
}

impl Submission {
    /// Step in which this submission is accepted
    pub const fn accepted_in(self) -> WizardStep {
        match self {
            Self::Operator => WizardStep::Operator,
            Self::Subject => WizardStep::Subject,
            Self::FieldOps => WizardStep::FieldOps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("cannot accept {submission:?} submission while in step {step:?}")]
    UnexpectedSubmission {
        step: WizardStep,
        submission: Submission,
    },
}

/// Partially filled inputs, one slot per phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Collected {
    pub user: Option<UserProfile>,
    pub candidate: Option<CandidateProfile>,
    pub missions: Option<MissionResults>,
}

impl Collected {
    /// The full aggregate, once every phase has been submitted
    pub fn complete(&self) -> Option<CollectedInputs> {
        Some(CollectedInputs {
            user: self.user.clone()?,
            candidate: self.candidate.clone()?,
            missions: self.missions.clone()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.candidate.is_none() && self.missions.is_none()
    }
}

/// Session-scoped intake state
///
/// Transitions consume the current value and return the next one, so a
/// state is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    step: WizardStep,
    collected: Collected,
    evaluation: Option<EvaluationResult>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Operator,
            collected: Collected::default(),
            evaluation: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn collected(&self) -> &Collected {
        &self.collected
    }

    /// Scoring result, present only on the dashboard
    pub fn evaluation(&self) -> Option<&EvaluationResult> {
        self.evaluation.as_ref()
    }

    /// Completed fraction of the wizard (step / 4)
    pub fn progress(&self) -> f64 {
        f64::from(self.step.number()) / WizardStep::ordered().len() as f64
    }

    /// Step 1 -> 2
    pub fn submit_operator(self, user: UserProfile) -> Result<Self, WizardError> {
        self.ensure_step(Submission::Operator)?;
        Ok(Self {
            step: WizardStep::Subject,
            collected: Collected {
                user: Some(user),
                ..self.collected
            },
            evaluation: None,
        })
    }

    /// Step 2 -> 3
    pub fn submit_subject(self, candidate: CandidateProfile) -> Result<Self, WizardError> {
        self.ensure_step(Submission::Subject)?;
        Ok(Self {
            step: WizardStep::FieldOps,
            collected: Collected {
                candidate: Some(candidate),
                ..self.collected
            },
            evaluation: None,
        })
    }

    /// Step 3 -> 4, evaluating the now complete inputs
    pub fn submit_field_ops(self, missions: MissionResults) -> Result<Self, WizardError> {
        self.ensure_step(Submission::FieldOps)?;
        let collected = Collected {
            missions: Some(missions),
            ..self.collected
        };
        let evaluation = collected.complete().map(|inputs| evaluate_collected(&inputs));

        Ok(Self {
            step: WizardStep::Dashboard,
            collected,
            evaluation,
        })
    }

    /// Back to step 1 with nothing collected, from any step
    pub fn reset(self) -> Self {
        Self::new()
    }

    fn ensure_step(&self, submission: Submission) -> Result<(), WizardError> {
        if self.step == submission.accepted_in() {
            Ok(())
        } else {
            Err(WizardError::UnexpectedSubmission {
                step: self.step,
                submission,
            })
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoundaryOutcome, Goal, IntellectualOutcome};

    fn operator() -> UserProfile {
        UserProfile {
            age: 30,
            income: 2400,
            goal: Goal::FamilyKids,
        }
    }

    fn subject() -> CandidateProfile {
        CandidateProfile {
            name: "Ana".to_string(),
            age: 25,
            has_kids: false,
        }
    }

    fn field_ops() -> MissionResults {
        MissionResults {
            boundary_test_outcome: BoundaryOutcome::CalmAcceptance,
            intellectual_test_outcome: IntellectualOutcome::AskedWithInterest,
            ex_partner_narrative: "It was my fault, I grew from it".to_string(),
        }
    }

    fn dashboard() -> WizardState {
        WizardState::new()
            .submit_operator(operator())
            .and_then(|s| s.submit_subject(subject()))
            .and_then(|s| s.submit_field_ops(field_ops()))
            .expect("full wizard run")
    }

    #[test]
    fn test_initial_state() {
        let state = WizardState::new();
        assert_eq!(state.step(), WizardStep::Operator);
        assert!(state.collected().is_empty());
        assert!(state.evaluation().is_none());
        assert_eq!(state.progress(), 0.25);
    }

    #[test]
    fn test_operator_transition() {
        let state = WizardState::new().submit_operator(operator()).unwrap();
        assert_eq!(state.step(), WizardStep::Subject);
        assert_eq!(state.collected().user, Some(operator()));
        assert!(state.collected().candidate.is_none());
    }

    #[test]
    fn test_subject_transition() {
        let state = WizardState::new()
            .submit_operator(operator())
            .and_then(|s| s.submit_subject(subject()))
            .unwrap();
        assert_eq!(state.step(), WizardStep::FieldOps);
        assert_eq!(state.collected().candidate, Some(subject()));
        assert!(state.collected().complete().is_none());
        assert!(state.evaluation().is_none());
    }

    #[test]
    fn test_field_ops_enters_dashboard_with_evaluation() {
        let state = dashboard();
        assert_eq!(state.step(), WizardStep::Dashboard);
        assert_eq!(state.progress(), 1.0);

        let inputs = state.collected().complete().expect("complete inputs");
        let evaluation = state.evaluation().expect("evaluation on dashboard");
        assert_eq!(evaluation, &evaluate_collected(&inputs));
        assert_eq!(evaluation.total, 100);
    }

    #[test]
    fn test_out_of_order_submission_is_rejected() {
        let err = WizardState::new().submit_subject(subject()).unwrap_err();
        assert_eq!(
            err,
            WizardError::UnexpectedSubmission {
                step: WizardStep::Operator,
                submission: Submission::Subject,
            }
        );
    }

    #[test]
    fn test_dashboard_has_no_forward_transition() {
        assert!(dashboard().submit_operator(operator()).is_err());
        assert!(dashboard().submit_subject(subject()).is_err());
        assert!(dashboard().submit_field_ops(field_ops()).is_err());
    }

    #[test]
    fn test_reset_from_every_step() {
        let states = vec![
            WizardState::new(),
            WizardState::new().submit_operator(operator()).unwrap(),
            WizardState::new()
                .submit_operator(operator())
                .and_then(|s| s.submit_subject(subject()))
                .unwrap(),
            dashboard(),
        ];

        for state in states {
            assert_eq!(state.reset(), WizardState::new());
        }
    }

    #[test]
    fn test_step_numbers() {
        let numbers: Vec<u8> = WizardStep::ordered().iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}
