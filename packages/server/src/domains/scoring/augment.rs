//! AI augmentation of the deterministic base scores.
//!
//! The model gets the base breakdown as ground truth and may move each
//! sub-score by at most 15 points. The prompt states that envelope; nothing
//! upstream enforces it, so the returned scores are clamped here as well
//! before anything is persisted.
//!
//! Failure behavior: rate-limit and quota errors surface to the caller
//! unchanged; every other service or parse failure falls back to the
//! deterministic base breakdown with fixed neutral text.

use openai_client::{extract_json, OpenAIError, ToolDefinition, StructuredOutput};

use crate::common::ApiError;
use crate::domains::candidates::{Candidate, Interaction};
use crate::domains::profiles::UserProfile;
use crate::domains::scoring::prompt::{scoring_system_prompt, scoring_user_prompt, MAX_AI_DEVIATION};
use crate::domains::scoring::scorer::clamp_score;
use crate::domains::scoring::types::ScoreBreakdown;
use crate::kernel::BaseAI;

/// Name of the tool the model must call with its analysis.
pub const SCORE_TOOL_NAME: &str = "record_compatibility_analysis";

const SCORE_TOOL_DESCRIPTION: &str =
    "Record the compatibility analysis for this candidate: adjusted scores, strengths, concerns and advice.";

/// Advice text used when the analysis falls back to the base scores.
pub const FALLBACK_ADVICE: &str =
    "These scores were computed from your journal answers alone. The AI analysis was unavailable; try again in a bit for personalized strengths, concerns and advice.";

/// Decorate a base breakdown as the fallback analysis.
pub fn fallback_analysis(base: &ScoreBreakdown) -> ScoreBreakdown {
    ScoreBreakdown {
        overall_score: base.overall_score,
        breakdown: base.breakdown.clone(),
        strengths: Vec::new(),
        concerns: Vec::new(),
        advice: FALLBACK_ADVICE.to_string(),
    }
}

/// Clamp an AI analysis into the allowed envelope around the base scores.
///
/// Each sub-score may sit at most `MAX_AI_DEVIATION` points from its base
/// value, and everything stays inside [0, 100]. The qualitative text is
/// taken from the AI as-is.
pub fn clamp_to_envelope(base: &ScoreBreakdown, ai: ScoreBreakdown) -> ScoreBreakdown {
    let bound = |base_score: i32, ai_score: i32| {
        clamp_score(ai_score.clamp(base_score - MAX_AI_DEVIATION, base_score + MAX_AI_DEVIATION))
    };

    ScoreBreakdown {
        overall_score: bound(base.overall_score, ai.overall_score),
        breakdown: crate::domains::scoring::types::SubScores {
            values_alignment: bound(base.breakdown.values_alignment, ai.breakdown.values_alignment),
            lifestyle_compatibility: bound(
                base.breakdown.lifestyle_compatibility,
                ai.breakdown.lifestyle_compatibility,
            ),
            emotional_compatibility: bound(
                base.breakdown.emotional_compatibility,
                ai.breakdown.emotional_compatibility,
            ),
            chemistry_score: bound(base.breakdown.chemistry_score, ai.breakdown.chemistry_score),
            future_goals: bound(base.breakdown.future_goals, ai.breakdown.future_goals),
        },
        strengths: ai.strengths,
        concerns: ai.concerns,
        advice: ai.advice,
    }
}

/// Parse the model's raw answer into a breakdown.
///
/// Tool-call arguments arrive as a JSON document; a model that answered in
/// prose instead gets a best-effort scan for an embedded JSON object.
pub fn parse_analysis(raw: &str) -> Option<ScoreBreakdown> {
    if let Ok(parsed) = serde_json::from_str::<ScoreBreakdown>(raw) {
        return Some(parsed);
    }

    extract_json(raw).and_then(|value| serde_json::from_value(value).ok())
}

/// Run the AI augmentation over a computed base breakdown.
///
/// Returns the envelope-clamped AI analysis, the fallback analysis when the
/// service fails or answers garbage, or an error for rate-limit/quota
/// conditions the user has to hear about.
pub async fn augment_scores(
    ai: &dyn BaseAI,
    user: &UserProfile,
    candidate: &Candidate,
    interactions: &[Interaction],
    base: &ScoreBreakdown,
) -> Result<ScoreBreakdown, ApiError> {
    let tool = ToolDefinition::from_schema(
        SCORE_TOOL_NAME,
        SCORE_TOOL_DESCRIPTION,
        ScoreBreakdown::openai_schema(),
    );
    let system = scoring_system_prompt();
    let prompt = scoring_user_prompt(user, candidate, interactions, base);

    let raw = match ai.generate_structured(&system, &prompt, &tool).await {
        Ok(raw) => raw,
        Err(err) => {
            return match err.downcast_ref::<OpenAIError>() {
                Some(OpenAIError::RateLimited) => Err(ApiError::RateLimited),
                Some(OpenAIError::QuotaExhausted) => Err(ApiError::QuotaExhausted),
                _ => {
                    tracing::warn!(error = %err, candidate_id = %candidate.id, "AI scoring failed; returning base scores");
                    Ok(fallback_analysis(base))
                }
            };
        }
    };

    match parse_analysis(&raw) {
        Some(analysis) => Ok(clamp_to_envelope(base, analysis)),
        None => {
            tracing::warn!(candidate_id = %candidate.id, "AI scoring answer was unparseable; returning base scores");
            Ok(fallback_analysis(base))
        }
    }
}
