use crate::models::{AgeRange, CollectedInputs, SweepPoint};
use crate::core::scoring::evaluate_collected;

/// Recompute the score while varying the candidate age
///
/// Every age in `range` is evaluated against an independent copy of `base`
/// with only `candidate.age` overridden. Points come back in ascending age
/// order; an inverted range yields no points.
pub fn sweep_candidate_age(base: &CollectedInputs, range: AgeRange) -> Vec<SweepPoint> {
    (range.min..=range.max)
        .map(|age| {
            let mut inputs = base.clone();
            inputs.candidate.age = age;

            let total = evaluate_collected(&inputs).total;

            SweepPoint {
                age,
                score: total,
                probability: f64::from(total) / 100.0,
            }
        })
        .collect()
}
