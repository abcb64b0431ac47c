use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{AgeRange, CollectedInputs};

/// Request to sweep explicit inputs over a candidate age range
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SweepRequest {
    #[validate(nested)]
    pub inputs: CollectedInputs,
    #[validate(range(min = 18, max = 50))]
    #[serde(alias = "min_age", rename = "minAge", default)]
    pub min_age: Option<u8>,
    #[validate(range(min = 18, max = 50))]
    #[serde(alias = "max_age", rename = "maxAge", default)]
    pub max_age: Option<u8>,
}

impl SweepRequest {
    pub fn range(&self, defaults: AgeRange) -> AgeRange {
        resolve_range(self.min_age, self.max_age, defaults)
    }
}

/// Query parameters for sweeping a session's inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SweepQuery {
    #[validate(range(min = 18, max = 50))]
    #[serde(alias = "min_age", rename = "minAge", default)]
    pub min_age: Option<u8>,
    #[validate(range(min = 18, max = 50))]
    #[serde(alias = "max_age", rename = "maxAge", default)]
    pub max_age: Option<u8>,
}

impl SweepQuery {
    pub fn range(&self, defaults: AgeRange) -> AgeRange {
        resolve_range(self.min_age, self.max_age, defaults)
    }
}

fn resolve_range(min_age: Option<u8>, max_age: Option<u8>, defaults: AgeRange) -> AgeRange {
    AgeRange::new(
        min_age.unwrap_or(defaults.min),
        max_age.unwrap_or(defaults.max),
    )
}
