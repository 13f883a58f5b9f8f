//! Prompt assembly for the AI augmentation call.
//!
//! The model receives the deterministic base scores as ground truth, the
//! two profiles, and the interaction history, and must answer through the
//! structured analysis tool.

use crate::domains::candidates::{Candidate, Interaction};
use crate::domains::profiles::UserProfile;
use crate::domains::scoring::types::ScoreBreakdown;

/// How far the model may move each sub-score from its base value.
pub const MAX_AI_DEVIATION: i32 = 15;

/// System prompt for compatibility analysis.
pub fn scoring_system_prompt() -> String {
    format!(
        r#"You are a thoughtful, honest dating coach analyzing one connection in a user's private dating journal.

You are given rule-based base compatibility scores computed from the couple's stated values, goals, lifestyles and chemistry ratings. Treat those base scores as ground truth: you may adjust each sub-score by at most {max_deviation} points in either direction to reflect nuance from the interaction history, and every score must stay between 0 and 100.

Respond by calling the provided tool with:
- the (possibly adjusted) five sub-scores and overall score
- 2-4 concrete strengths of this connection
- 1-3 honest concerns worth watching
- one short piece of practical, specific advice

Be warm but direct. Never invent facts that are not in the journal."#,
        max_deviation = MAX_AI_DEVIATION
    )
}

/// User prompt carrying the full scoring context.
pub fn scoring_user_prompt(
    user: &UserProfile,
    candidate: &Candidate,
    interactions: &[Interaction],
    base: &ScoreBreakdown,
) -> String {
    format!(
        r#"## The journal owner
{user_summary}

## The candidate: {name}
{candidate_summary}

## Chemistry ratings (1-5)
{chemistry}

## Interaction history ({interaction_count} entries)
{history}

## Base compatibility scores (ground truth)
{base_scores}"#,
        user_summary = summarize_user(user),
        name = candidate.name,
        candidate_summary = summarize_candidate(candidate),
        chemistry = summarize_chemistry(candidate),
        interaction_count = interactions.len(),
        history = summarize_interactions(interactions),
        base_scores = serde_json::to_string_pretty(&base.breakdown).unwrap_or_default(),
    )
}

fn field(label: &str, value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| format!("- {}: {}", label, v))
}

fn rated_field(label: &str, value: &Option<String>, importance: Option<i16>) -> Option<String> {
    value.as_ref().map(|v| match importance {
        Some(i) => format!("- {}: {} (importance {}/5)", label, v, i),
        None => format!("- {}: {}", label, v),
    })
}

fn summarize_user(user: &UserProfile) -> String {
    let lines: Vec<String> = [
        field("Looking for", &user.relationship_goal),
        rated_field("Religion", &user.religion, user.faith_importance),
        rated_field("Politics", &user.politics, user.politics_importance),
        field("Kids status", &user.kids_status),
        field("Kids desire", &user.kids_desire),
        field("Attachment style", &user.attachment_style),
        field("Activity level", &user.activity_level),
        field("Education", &user.education_level),
    ]
    .into_iter()
    .flatten()
    .collect();

    if lines.is_empty() {
        "- (no profile details provided)".to_string()
    } else {
        lines.join("\n")
    }
}

fn summarize_candidate(candidate: &Candidate) -> String {
    let lines: Vec<String> = [
        field("Status", &Some(candidate.status.clone())),
        field("Looking for", &candidate.their_relationship_goal),
        field("Religion", &candidate.their_religion),
        field("Politics", &candidate.their_politics),
        field("Kids status", &candidate.their_kids_status),
        field("Kids desire", &candidate.their_kids_desire),
        field("Attachment style", &candidate.their_attachment_style),
        field("Exercise habit", &candidate.their_exercise_habit),
        field("Education", &candidate.their_education_level),
        field("Notes", &candidate.notes),
    ]
    .into_iter()
    .flatten()
    .collect();

    lines.join("\n")
}

fn summarize_chemistry(candidate: &Candidate) -> String {
    let rating = |label: &str, value: Option<i16>| match value {
        Some(v) => format!("- {}: {}", label, v),
        None => format!("- {}: not rated", label),
    };

    [
        rating("Physical attraction", candidate.physical_attraction),
        rating("Intellectual connection", candidate.intellectual_connection),
        rating("Humor compatibility", candidate.humor_compatibility),
        rating("Energy match", candidate.energy_match),
        rating("Overall chemistry", candidate.overall_chemistry),
    ]
    .join("\n")
}

fn summarize_interactions(interactions: &[Interaction]) -> String {
    if interactions.is_empty() {
        return "(no interactions logged yet)".to_string();
    }

    interactions
        .iter()
        .map(|i| {
            let mut line = format!(
                "- {} | {}",
                i.occurred_at.format("%Y-%m-%d"),
                i.interaction_type
            );
            if let Some(title) = &i.title {
                line.push_str(&format!(" | {}", title));
            }
            if let Some(feeling) = i.feeling {
                line.push_str(&format!(" | felt {}/5", feeling));
            }
            if let Some(notes) = &i.notes {
                line.push_str(&format!(" | {}", notes));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
