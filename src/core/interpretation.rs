use serde::Serialize;

use crate::models::{Dimension, EvaluationResult, Odds, Reason};

/// Scores above this read as a stable relationship
pub const STABLE_THRESHOLD: u8 = 70;

/// Scores below this point to structural problems
pub const STRUCTURAL_THRESHOLD: u8 = 40;

/// Overall reading of a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Stable,
    ManageableRisk,
    StructuralProblems,
}

impl Verdict {
    pub fn from_total(total: u8) -> Self {
        if total > STABLE_THRESHOLD {
            Self::Stable
        } else if total >= STRUCTURAL_THRESHOLD {
            Self::ManageableRisk
        } else {
            Self::StructuralProblems
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Stable => "High probability of a stable relationship.",
            Self::ManageableRisk => "Manageable but risky incompatibilities.",
            Self::StructuralProblems => "Serious structural problems.",
        }
    }
}

/// Colour band of the score gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeBand {
    Red,
    Amber,
    Green,
}

impl GaugeBand {
    pub fn from_total(total: u8) -> Self {
        match total {
            0..=39 => Self::Red,
            40..=69 => Self::Amber,
            _ => Self::Green,
        }
    }
}

/// Share of the total carried by one dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionWeight {
    pub dimension: Dimension,
    pub label: &'static str,
    pub points: i32,
    #[serde(rename = "relativeWeightPct")]
    pub relative_weight_pct: f64,
}

/// Everything the dashboard derives from a single evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretation {
    pub probability: f64,
    pub odds: Odds,
    pub verdict: Verdict,
    pub summary: &'static str,
    pub gauge: GaugeBand,
    pub weights: Vec<DimensionWeight>,
    pub strengths: Vec<Reason>,
    pub risks: Vec<Reason>,
}

impl Interpretation {
    pub fn from_result(result: &EvaluationResult) -> Self {
        let (strengths, risks) = split_reasons(&result.reasons);

        Self {
            probability: probability(result.total),
            odds: odds(result.total),
            verdict: Verdict::from_total(result.total),
            summary: Verdict::from_total(result.total).description(),
            gauge: GaugeBand::from_total(result.total),
            weights: relative_weights(result),
            strengths,
            risks,
        }
    }
}

#[inline]
pub fn probability(total: u8) -> f64 {
    f64::from(total) / 100.0
}

/// Success-to-failure odds, undefined at the 0 and 100 boundaries
pub fn odds(total: u8) -> Odds {
    match total {
        0 | 100 => Odds::Undefined,
        _ => {
            let p = probability(total);
            Odds::Defined(p / (1.0 - p))
        }
    }
}

/// Per-dimension share of the total, 0 when the total itself is 0
pub fn relative_weights(result: &EvaluationResult) -> Vec<DimensionWeight> {
    let total = f64::from(result.total);

    result
        .breakdown
        .iter()
        .map(|entry| DimensionWeight {
            dimension: entry.dimension,
            label: entry.dimension.label(),
            points: entry.points,
            relative_weight_pct: if result.total == 0 {
                0.0
            } else {
                f64::from(entry.points) / total * 100.0
            },
        })
        .collect()
}

/// Split reasons into strengths and risks, keeping evaluation order
pub fn split_reasons(reasons: &[Reason]) -> (Vec<Reason>, Vec<Reason>) {
    reasons
        .iter()
        .cloned()
        .partition(|reason| reason.severity.is_strength())
}
