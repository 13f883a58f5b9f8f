//! Compatibility analysis output types.
//!
//! `ScoreBreakdown` doubles as the structured-output schema sent to the AI
//! service (via `schemars`), so its field names are part of the AI contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The five 0-100 compatibility dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubScores {
    /// Shared values: religion and politics
    pub values_alignment: i32,
    /// Day-to-day fit: activity level and education
    pub lifestyle_compatibility: i32,
    /// Attachment-style pairing
    pub emotional_compatibility: i32,
    /// Scaled average of the five 1-5 chemistry ratings
    pub chemistry_score: i32,
    /// Relationship goals and kids alignment
    pub future_goals: i32,
}

/// A full compatibility analysis for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    /// Weighted combination of the five sub-scores, 0-100
    pub overall_score: i32,
    pub breakdown: SubScores,
    /// What's working in this connection
    pub strengths: Vec<String>,
    /// What to keep an eye on
    pub concerns: Vec<String>,
    /// One short piece of practical advice
    pub advice: String,
}

impl ScoreBreakdown {
    /// Whether every score is inside [0, 100].
    pub fn in_bounds(&self) -> bool {
        let b = &self.breakdown;
        [
            self.overall_score,
            b.values_alignment,
            b.lifestyle_compatibility,
            b.emotional_compatibility,
            b.chemistry_score,
            b.future_goals,
        ]
        .iter()
        .all(|s| (0..=100).contains(s))
    }
}
