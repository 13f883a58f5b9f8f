//! Flag detection: classify interaction history into red and green flags.
//!
//! Unlike compatibility scoring there is no deterministic base here: the
//! classification is delegated entirely to the AI service. The local logic
//! is assembling the interaction context blob and persisting the two
//! returned arrays. Service failure therefore surfaces to the user (who can
//! retry) instead of falling back.

use openai_client::{extract_json, OpenAIError, StructuredOutput, ToolDefinition};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::{ApiError, CandidateId, UserId};
use crate::domains::candidates::{Candidate, Interaction};
use crate::kernel::{BaseAI, ServerDeps};

/// Name of the tool the model must call with its classification.
pub const FLAG_TOOL_NAME: &str = "record_behavior_flags";

const FLAG_TOOL_DESCRIPTION: &str =
    "Record the red flags (warning signs) and green flags (positive signs) observed in this candidate's interaction history.";

/// AI-classified behavioral flags for a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FlagAnalysis {
    /// Short warning-sign labels, e.g. "Cancels plans last minute"
    pub red_flags: Vec<String>,
    /// Short positive-sign labels, e.g. "Consistent communicator"
    pub green_flags: Vec<String>,
}

fn flag_system_prompt() -> String {
    r#"You are an observant, fair dating coach reviewing one candidate's interaction history from a user's private dating journal.

Classify what you actually observe into:
- red flags: short labels for genuine warning signs (inconsistency, disrespect, pressure, avoidance)
- green flags: short labels for genuine positive signs (consistency, effort, emotional openness)

Only report patterns supported by the journal entries. An empty list is a valid answer. Respond by calling the provided tool."#
        .to_string()
}

/// The interaction history as a JSON context blob.
fn flag_user_prompt(candidate: &Candidate, interactions: &[Interaction]) -> String {
    let history: Vec<serde_json::Value> = interactions
        .iter()
        .map(|i| {
            serde_json::json!({
                "occurred_at": i.occurred_at.to_rfc3339(),
                "type": i.interaction_type,
                "title": i.title,
                "notes": i.notes,
                "feeling": i.feeling,
            })
        })
        .collect();

    let context = serde_json::json!({
        "candidate": {
            "name": candidate.name,
            "status": candidate.status,
            "notes": candidate.notes,
        },
        "interactions": history,
    });

    serde_json::to_string_pretty(&context).unwrap_or_default()
}

fn parse_flags(raw: &str) -> Option<FlagAnalysis> {
    if let Ok(parsed) = serde_json::from_str::<FlagAnalysis>(raw) {
        return Some(parsed);
    }

    extract_json(raw).and_then(|value| serde_json::from_value(value).ok())
}

/// Ask the AI service to classify a candidate's interaction history.
pub async fn detect_flags(
    ai: &dyn BaseAI,
    candidate: &Candidate,
    interactions: &[Interaction],
) -> Result<FlagAnalysis, ApiError> {
    let tool = ToolDefinition::from_schema(
        FLAG_TOOL_NAME,
        FLAG_TOOL_DESCRIPTION,
        FlagAnalysis::openai_schema(),
    );
    let system = flag_system_prompt();
    let prompt = flag_user_prompt(candidate, interactions);

    let raw = ai
        .generate_structured(&system, &prompt, &tool)
        .await
        .map_err(|err| match err.downcast_ref::<OpenAIError>() {
            Some(OpenAIError::RateLimited) => ApiError::RateLimited,
            Some(OpenAIError::QuotaExhausted) => ApiError::QuotaExhausted,
            _ => ApiError::Internal(err.context("flag detection failed")),
        })?;

    parse_flags(&raw).ok_or_else(|| {
        ApiError::Internal(anyhow::anyhow!(
            "flag detection answer was not a valid classification"
        ))
    })
}

/// The flag operation: load, classify, persist, return.
///
/// Persistence is best-effort like scoring: a failed write is logged and the
/// classification is still returned.
pub async fn analyze_candidate_flags(
    deps: &ServerDeps,
    user_id: UserId,
    candidate_id: CandidateId,
) -> Result<FlagAnalysis, ApiError> {
    let candidate = Candidate::find_for_user(candidate_id, user_id, &deps.db_pool)
        .await?
        .ok_or(ApiError::NotFound("candidate"))?;

    let interactions = Interaction::find_for_candidate(candidate_id, &deps.db_pool).await?;

    let flags = detect_flags(deps.ai.as_ref(), &candidate, &interactions).await?;

    if let Err(err) = Candidate::save_flags(candidate_id, &flags, &deps.db_pool).await {
        tracing::warn!(
            error = %err,
            candidate_id = %candidate_id,
            "Failed to persist flag analysis; returning it anyway"
        );
    }

    tracing::info!(
        candidate_id = %candidate_id,
        red = flags.red_flags.len(),
        green = flags.green_flags.len(),
        "Flag analysis complete"
    );

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::UserId;
    use crate::kernel::MockAI;
    use chrono::Utc;

    fn candidate_with_history() -> (Candidate, Vec<Interaction>) {
        let user_id = UserId::new();
        let candidate = Candidate::blank(user_id, "Alex");
        let interaction = Interaction {
            id: crate::common::InteractionId::new(),
            candidate_id: candidate.id,
            interaction_type: "date".into(),
            title: Some("Coffee at the park".into()),
            notes: Some("Showed up twenty minutes late, apologized twice".into()),
            feeling: Some(3),
            occurred_at: Utc::now(),
            created_at: Utc::now(),
        };
        (candidate, vec![interaction])
    }

    #[tokio::test]
    async fn test_detect_flags_parses_tool_answer() {
        let (candidate, interactions) = candidate_with_history();
        let mock = MockAI::new().with_response(
            r#"{"red_flags": ["Chronically late"], "green_flags": ["Owns mistakes"]}"#,
        );

        let flags = detect_flags(&mock, &candidate, &interactions).await.unwrap();
        assert_eq!(flags.red_flags, vec!["Chronically late"]);
        assert_eq!(flags.green_flags, vec!["Owns mistakes"]);

        // The context blob carried the journal entries
        let calls = mock.structured_calls();
        assert_eq!(calls[0].tool_name, FLAG_TOOL_NAME);
        assert!(calls[0].user_prompt.contains("Coffee at the park"));
        assert!(calls[0].user_prompt.contains("interactions"));
    }

    #[tokio::test]
    async fn test_detect_flags_surfaces_service_failure() {
        let (candidate, interactions) = candidate_with_history();
        let mock = MockAI::new().with_error(OpenAIError::Api {
            status: 500,
            message: "oops".into(),
        });

        let err = detect_flags(&mock, &candidate, &interactions)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[tokio::test]
    async fn test_detect_flags_maps_rate_limit() {
        let (candidate, interactions) = candidate_with_history();
        let mock = MockAI::new().with_error(OpenAIError::RateLimited);

        let err = detect_flags(&mock, &candidate, &interactions)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::RateLimited));
    }

    #[tokio::test]
    async fn test_detect_flags_recovers_prose_wrapped_json() {
        let (candidate, interactions) = candidate_with_history();
        let mock = MockAI::new()
            .with_response(r#"Here you go: {"red_flags": [], "green_flags": ["Great listener"]}"#);

        let flags = detect_flags(&mock, &candidate, &interactions).await.unwrap();
        assert!(flags.red_flags.is_empty());
        assert_eq!(flags.green_flags, vec!["Great listener"]);
    }
}
