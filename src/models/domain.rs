use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

/// What the operator is looking for in a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Family/Kids")]
    FamilyKids,
    #[serde(rename = "Stable Partner")]
    StablePartner,
    #[serde(rename = "Casual")]
    Casual,
}

impl Goal {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FamilyKids => "Family/Kids",
            Self::StablePartner => "Stable Partner",
            Self::Casual => "Casual",
        }
    }
}

/// Operator (phase 1) profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    #[validate(range(min = 20, max = 60))]
    pub age: u8,
    pub income: u32,
    pub goal: Goal,
}

/// Subject (phase 2) profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: String,
    #[validate(range(min = 18, max = 50))]
    pub age: u8,
    #[serde(rename = "hasKids", default)]
    pub has_kids: bool,
}

/// Reaction to a declined request ("the no test")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryOutcome {
    #[serde(rename = "calm acceptance")]
    CalmAcceptance,
    #[serde(rename = "visible annoyance")]
    VisibleAnnoyance,
    #[serde(rename = "manipulation/revenge")]
    ManipulationRevenge,
}

/// Reaction when the operator talks about something they care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntellectualOutcome {
    #[serde(rename = "asked with interest")]
    AskedWithInterest,
    #[serde(rename = "listened passively")]
    ListenedPassively,
    #[serde(rename = "ignored/phone")]
    IgnoredPhone,
}

/// Field operation (phase 3) test outcomes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MissionResults {
    #[serde(rename = "boundaryTestOutcome")]
    pub boundary_test_outcome: BoundaryOutcome,
    #[serde(rename = "intellectualTestOutcome")]
    pub intellectual_test_outcome: IntellectualOutcome,
    #[serde(rename = "exPartnerNarrative", default)]
    pub ex_partner_narrative: String,
}

/// Complete input aggregate consumed by the scoring engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CollectedInputs {
    #[validate(nested)]
    pub user: UserProfile,
    #[validate(nested)]
    pub candidate: CandidateProfile,
    #[validate(nested)]
    pub missions: MissionResults,
}

/// Scoring dimensions, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Biological,
    Conflict,
    Intellect,
    Maturity,
}

impl Dimension {
    pub const fn ordered() -> [Self; 4] {
        [Self::Biological, Self::Conflict, Self::Intellect, Self::Maturity]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Biological => "Biological",
            Self::Conflict => "Conflict",
            Self::Intellect => "Intellect",
            Self::Maturity => "Maturity",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Biological => "Biology / Age Fit",
            Self::Conflict => "Conflict Dynamics",
            Self::Intellect => "Intellect / Openness",
            Self::Maturity => "Emotional Maturity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Positive,
    Warning,
    Negative,
}

impl Severity {
    /// Positive findings are strengths, everything else is a risk
    pub const fn is_strength(self) -> bool {
        matches!(self, Self::Positive)
    }
}

/// One rationale entry per evaluated dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub severity: Severity,
    pub dimension: Dimension,
    pub message: String,
}

/// Signed contribution of a single dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub points: i32,
}

/// Per-dimension contributions, kept in evaluation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    entries: Vec<DimensionScore>,
}

impl ScoreBreakdown {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, dimension: Dimension, points: i32) {
        self.entries.push(DimensionScore { dimension, points });
    }

    pub fn get(&self, dimension: Dimension) -> Option<i32> {
        self.entries
            .iter()
            .find(|entry| entry.dimension == dimension)
            .map(|entry| entry.points)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionScore> {
        self.entries.iter()
    }

    pub fn sum(&self) -> i32 {
        self.entries.iter().map(|entry| entry.points).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as a JSON object whose keys follow evaluation order
impl Serialize for ScoreBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.dimension.key(), &entry.points)?;
        }
        map.end()
    }
}

/// Output of one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub total: u8,
    pub breakdown: ScoreBreakdown,
    pub reasons: Vec<Reason>,
}

/// Inclusive candidate age range for a sensitivity sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn len(&self) -> usize {
        if self.min > self.max {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 18, max: 45 }
    }
}

/// One point of the age response curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub age: u8,
    pub score: u8,
    pub probability: f64,
}

/// Success odds derived from a total score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Odds {
    Defined(f64),
    /// Total is exactly 0 or 100, so p / (1 - p) has no finite value
    Undefined,
}
