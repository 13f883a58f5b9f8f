//! Deterministic base scoring.
//!
//! `compute_base_scores` is a pure function: same profile and candidate
//! always produce the same breakdown, missing fields are neutral, and it
//! never fails regardless of input. The AI augmentation layer treats this
//! output as ground truth.

use crate::domains::candidates::Candidate;
use crate::domains::profiles::UserProfile;
use crate::domains::scoring::rules::{
    Rule, EMOTIONAL_RULES, FUTURE_GOALS_RULES, LIFESTYLE_RULES, VALUES_ALIGNMENT_RULES,
};
use crate::domains::scoring::types::{ScoreBreakdown, SubScores};

/// Every rule-based sub-score starts at the midpoint.
pub const BASELINE: i32 = 50;

/// Fixed weights combining the five sub-scores into the overall score.
pub struct ScoreWeights {
    pub values: f64,
    pub lifestyle: f64,
    pub emotional: f64,
    pub chemistry: f64,
    pub future_goals: f64,
}

/// Chemistry carries the most weight; lifestyle the least.
pub const WEIGHTS: ScoreWeights = ScoreWeights {
    values: 0.20,
    lifestyle: 0.15,
    emotional: 0.20,
    chemistry: 0.25,
    future_goals: 0.20,
};

/// Clamp a score into the valid [0, 100] range.
pub fn clamp_score(score: i32) -> i32 {
    score.clamp(0, 100)
}

/// Apply an ordered rule list to the baseline and clamp.
fn apply_rules(rules: &[Rule], user: &UserProfile, candidate: &Candidate) -> i32 {
    let total = rules
        .iter()
        .fold(BASELINE, |acc, (_, rule)| acc + rule(user, candidate));
    clamp_score(total)
}

/// Chemistry sub-score: the five 1-5 ratings averaged and scaled to 0-100.
///
/// With no ratings at all the dimension is unknown and sits at the 50
/// midpoint like the rule-based ones. Once any rating exists, missing
/// ratings default to 3 (neutral) and out-of-range ratings are pulled back
/// into [1, 5] before averaging, so bad input can't push the score out of
/// bounds or break monotonicity.
fn chemistry_score(candidate: &Candidate) -> i32 {
    let ratings = [
        candidate.physical_attraction,
        candidate.intellectual_connection,
        candidate.humor_compatibility,
        candidate.energy_match,
        candidate.overall_chemistry,
    ];

    if ratings.iter().all(Option::is_none) {
        return BASELINE;
    }

    let sum: f64 = ratings
        .iter()
        .map(|r| f64::from(r.unwrap_or(3).clamp(1, 5)))
        .sum();
    let average = sum / ratings.len() as f64;

    clamp_score((average * 20.0).round() as i32)
}

/// The fixed weighted combination of the five sub-scores.
pub fn weighted_overall(breakdown: &SubScores) -> i32 {
    let overall = f64::from(breakdown.values_alignment) * WEIGHTS.values
        + f64::from(breakdown.lifestyle_compatibility) * WEIGHTS.lifestyle
        + f64::from(breakdown.emotional_compatibility) * WEIGHTS.emotional
        + f64::from(breakdown.chemistry_score) * WEIGHTS.chemistry
        + f64::from(breakdown.future_goals) * WEIGHTS.future_goals;

    clamp_score(overall.round() as i32)
}

/// Compute the deterministic base compatibility breakdown for a pair.
///
/// Strengths, concerns and advice are left empty here; they are qualitative
/// and belong to the AI augmentation (or its fixed fallback text).
pub fn compute_base_scores(user: &UserProfile, candidate: &Candidate) -> ScoreBreakdown {
    let breakdown = SubScores {
        values_alignment: apply_rules(VALUES_ALIGNMENT_RULES, user, candidate),
        lifestyle_compatibility: apply_rules(LIFESTYLE_RULES, user, candidate),
        emotional_compatibility: apply_rules(EMOTIONAL_RULES, user, candidate),
        chemistry_score: chemistry_score(candidate),
        future_goals: apply_rules(FUTURE_GOALS_RULES, user, candidate),
    };

    ScoreBreakdown {
        overall_score: weighted_overall(&breakdown),
        breakdown,
        strengths: Vec::new(),
        concerns: Vec::new(),
        advice: String::new(),
    }
}
