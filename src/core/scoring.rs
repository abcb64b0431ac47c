use crate::models::{
    BoundaryOutcome, CandidateProfile, CollectedInputs, Dimension, EvaluationResult,
    IntellectualOutcome, MissionResults, Reason, ScoreBreakdown, Severity, UserProfile,
};

/// Starting point before any dimension is applied
pub const BASE_SCORE: i32 = 50;

pub const MIN_TOTAL: i32 = 0;
pub const MAX_TOTAL: i32 = 100;

/// Narratives shorter than this are treated as not articulated
const MIN_NARRATIVE_CHARS: usize = 10;

/// Contribution of a single dimension together with its rationale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub points: i32,
    pub severity: Severity,
    pub message: &'static str,
}

impl Finding {
    const fn new(points: i32, severity: Severity, message: &'static str) -> Self {
        Self {
            points,
            severity,
            message,
        }
    }
}

/// Evaluate compatibility for a complete set of inputs
///
/// Scoring formula:
/// total = clamp(
///     50 +
///     age_fit +         # +20 / +10 / -10 by candidate age bucket
///     conflict +        # +25 / -15 / -40 by boundary test outcome
///     intellect +       # +25 / +5 / -30 by intellectual test outcome
///     maturity,         # +15 / -20 by ex-partner narrative
///     0, 100)
///
/// The breakdown keeps the raw contributions, only the total is clamped.
pub fn evaluate(
    user: &UserProfile,
    candidate: &CandidateProfile,
    missions: &MissionResults,
) -> EvaluationResult {
    let findings = [
        (Dimension::Biological, score_age_fit(user, candidate)),
        (
            Dimension::Conflict,
            score_conflict_response(missions.boundary_test_outcome),
        ),
        (
            Dimension::Intellect,
            score_intellectual_engagement(missions.intellectual_test_outcome),
        ),
        (
            Dimension::Maturity,
            score_emotional_maturity(&missions.ex_partner_narrative),
        ),
    ];

    let mut breakdown = ScoreBreakdown::with_capacity(findings.len());
    let mut reasons = Vec::with_capacity(findings.len());

    for (dimension, finding) in findings {
        breakdown.push(dimension, finding.points);
        reasons.push(Reason {
            severity: finding.severity,
            dimension,
            message: finding.message.to_string(),
        });
    }

    let total = (BASE_SCORE + breakdown.sum()).clamp(MIN_TOTAL, MAX_TOTAL) as u8;

    EvaluationResult {
        total,
        breakdown,
        reasons,
    }
}

/// Convenience wrapper over [`evaluate`] for a collected aggregate
pub fn evaluate_collected(inputs: &CollectedInputs) -> EvaluationResult {
    evaluate(&inputs.user, &inputs.candidate, &inputs.missions)
}

/// Biological / age-fit dimension
///
/// The age buckets apply for every goal, not only "Family/Kids". `user` is
/// kept so the dimension can be gated on `user.goal` if product decides that
/// non-family sessions should skip it; until then the goal is not consulted.
#[inline]
pub fn score_age_fit(_user: &UserProfile, candidate: &CandidateProfile) -> Finding {
    match candidate.age {
        20..=32 => Finding::new(
            20,
            Severity::Positive,
            "Optimal fertility window: age 20-32 maximizes the chance of a healthy pregnancy.",
        ),
        33..=37 => Finding::new(
            10,
            Severity::Warning,
            "Mid fertility window: moderate biological urgency.",
        ),
        _ => Finding::new(
            -10,
            Severity::Negative,
            "Obstetric risk: age outside the optimal range for a large family.",
        ),
    }
}

/// Conflict-response dimension, keyed on the boundary test
#[inline]
pub fn score_conflict_response(outcome: BoundaryOutcome) -> Finding {
    match outcome {
        BoundaryOutcome::CalmAcceptance => Finding::new(
            25,
            Severity::Positive,
            "Low conflict: accepting a no signals emotional security and no controlling traits.",
        ),
        BoundaryOutcome::VisibleAnnoyance => Finding::new(
            -15,
            Severity::Warning,
            "Neuroticism alert: annoyance at boundaries suggests low frustration tolerance.",
        ),
        BoundaryOutcome::ManipulationRevenge => Finding::new(
            -40,
            Severity::Negative,
            "Red flag: manipulation or revenge after a boundary is the top predictor of emotional abuse.",
        ),
    }
}

/// Intellectual-engagement dimension, keyed on the intellectual test
#[inline]
pub fn score_intellectual_engagement(outcome: IntellectualOutcome) -> Finding {
    match outcome {
        IntellectualOutcome::AskedWithInterest => Finding::new(
            25,
            Severity::Positive,
            "Intellectual compatibility: active constructive responding predicts longevity.",
        ),
        IntellectualOutcome::ListenedPassively => Finding::new(
            5,
            Severity::Warning,
            "Boredom risk: passive listening is acceptable but falls short of real stimulation.",
        ),
        IntellectualOutcome::IgnoredPhone => Finding::new(
            -30,
            Severity::Negative,
            "Intellectual contempt: ignoring your passion is one of the four horsemen.",
        ),
    }
}

/// Emotional-maturity dimension, keyed on how the ex-partner story is told
///
/// Matching is case-insensitive; length is counted in characters.
#[inline]
pub fn score_emotional_maturity(narrative: &str) -> Finding {
    let lowered = narrative.to_lowercase();
    let articulated = narrative.chars().count() >= MIN_NARRATIVE_CHARS;
    let owns_fault = !lowered.contains("blame") || lowered.contains("my fault");

    if articulated && owns_fault {
        Finding::new(
            15,
            Severity::Positive,
            "Internal locus of control: owning past mistakes shows the maturity to resolve conflict.",
        )
    } else {
        Finding::new(
            -20,
            Severity::Negative,
            "Victimhood: no self-criticism in the story suggests emotional immaturity.",
        )
    }
}
