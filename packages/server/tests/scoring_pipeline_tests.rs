//! End-to-end tests for the scoring pipeline: base computation, prompt
//! assembly, AI augmentation, envelope clamping, and fallback behavior.

use server_core::common::UserId;
use server_core::domains::candidates::Candidate;
use server_core::domains::profiles::UserProfile;
use server_core::domains::scoring::{
    augment_scores, compute_base_scores, ScoreBreakdown, SubScores, FALLBACK_ADVICE,
};
use server_core::kernel::{BaseAI, MockAI};

use openai_client::OpenAIError;

fn rich_pair() -> (UserProfile, Candidate) {
    let user_id = UserId::new();
    let mut user = UserProfile::empty(user_id);
    user.relationship_goal = Some("serious".into());
    user.religion = Some("jewish".into());
    user.faith_importance = Some(4);
    user.politics = Some("liberal".into());
    user.politics_importance = Some(3);
    user.kids_desire = Some("definitely_yes".into());
    user.attachment_style = Some("secure".into());
    user.activity_level = Some("moderate".into());

    let mut candidate = Candidate::blank(user_id, "Riley");
    candidate.their_relationship_goal = Some("serious".into());
    candidate.their_religion = Some("jewish".into());
    candidate.their_politics = Some("liberal".into());
    candidate.their_kids_desire = Some("definitely_yes".into());
    candidate.their_attachment_style = Some("anxious".into());
    candidate.their_exercise_habit = Some("sometimes".into());
    candidate.physical_attraction = Some(4);
    candidate.intellectual_connection = Some(5);
    candidate.humor_compatibility = Some(4);
    candidate.energy_match = Some(3);
    candidate.overall_chemistry = Some(4);

    (user, candidate)
}

fn ai_answer(base: &ScoreBreakdown, nudge: i32) -> String {
    serde_json::to_string(&ScoreBreakdown {
        overall_score: base.overall_score + nudge,
        breakdown: SubScores {
            values_alignment: base.breakdown.values_alignment + nudge,
            lifestyle_compatibility: base.breakdown.lifestyle_compatibility + nudge,
            emotional_compatibility: base.breakdown.emotional_compatibility + nudge,
            chemistry_score: base.breakdown.chemistry_score + nudge,
            future_goals: base.breakdown.future_goals + nudge,
        },
        strengths: vec!["Aligned on the big questions".into()],
        concerns: vec!["Pursue/withdraw dynamic to watch".into()],
        advice: "Talk about reassurance needs early".into(),
    })
    .unwrap()
}

#[test]
fn base_scores_for_a_well_matched_pair() {
    let (user, candidate) = rich_pair();
    let base = compute_base_scores(&user, &candidate);

    // religion +25, politics aligned +20
    assert_eq!(base.breakdown.values_alignment, 95);
    // goal +30, kids agreement +15
    assert_eq!(base.breakdown.future_goals, 95);
    // secure user with anxious candidate +20
    assert_eq!(base.breakdown.emotional_compatibility, 70);
    // moderate vs sometimes aligned +20
    assert_eq!(base.breakdown.lifestyle_compatibility, 70);
    // (4+5+4+3+4)/5 = 4.0 -> 80
    assert_eq!(base.breakdown.chemistry_score, 80);
    // 95*.20 + 70*.15 + 70*.20 + 80*.25 + 95*.20 = 82.5 -> 83 (round half up)
    assert_eq!(base.overall_score, 83);
    assert!(base.in_bounds());
}

#[tokio::test]
async fn augmented_analysis_within_envelope_passes_through() {
    let (user, candidate) = rich_pair();
    let base = compute_base_scores(&user, &candidate);
    let mock = MockAI::new().with_response(ai_answer(&base, -10));

    let analysis = augment_scores(&mock, &user, &candidate, &[], &base)
        .await
        .unwrap();

    assert_eq!(
        analysis.breakdown.emotional_compatibility,
        base.breakdown.emotional_compatibility - 10
    );
    assert_eq!(analysis.strengths.len(), 1);
    assert_eq!(analysis.advice, "Talk about reassurance needs early");
}

#[tokio::test]
async fn augmented_analysis_beyond_envelope_is_clamped() {
    let (user, candidate) = rich_pair();
    let base = compute_base_scores(&user, &candidate);
    let mock = MockAI::new().with_response(ai_answer(&base, -40));

    let analysis = augment_scores(&mock, &user, &candidate, &[], &base)
        .await
        .unwrap();

    // Every dimension is held within 15 points of its base value
    let pairs = [
        (analysis.breakdown.values_alignment, base.breakdown.values_alignment),
        (
            analysis.breakdown.lifestyle_compatibility,
            base.breakdown.lifestyle_compatibility,
        ),
        (
            analysis.breakdown.emotional_compatibility,
            base.breakdown.emotional_compatibility,
        ),
        (analysis.breakdown.chemistry_score, base.breakdown.chemistry_score),
        (analysis.breakdown.future_goals, base.breakdown.future_goals),
        (analysis.overall_score, base.overall_score),
    ];
    for (adjusted, base_score) in pairs {
        assert!(
            (adjusted - base_score).abs() <= 15,
            "{} drifted more than 15 from {}",
            adjusted,
            base_score
        );
    }
    assert!(analysis.in_bounds());
}

#[tokio::test]
async fn http_500_from_ai_returns_base_with_fallback_advice() {
    let (user, candidate) = rich_pair();
    let base = compute_base_scores(&user, &candidate);
    let mock = MockAI::new().with_error(OpenAIError::Api {
        status: 500,
        message: "internal server error".into(),
    });

    let analysis = augment_scores(&mock, &user, &candidate, &[], &base)
        .await
        .expect("service failure must not surface to the user");

    assert_eq!(analysis.breakdown, base.breakdown);
    assert_eq!(analysis.overall_score, base.overall_score);
    assert_eq!(analysis.advice, FALLBACK_ADVICE);
}

#[tokio::test]
async fn prompt_carries_interaction_history() {
    let (user, candidate) = rich_pair();
    let base = compute_base_scores(&user, &candidate);

    let interaction = server_core::domains::candidates::Interaction {
        id: server_core::common::InteractionId::new(),
        candidate_id: candidate.id,
        interaction_type: "date".into(),
        title: Some("Dinner downtown".into()),
        notes: Some("Conversation flowed for three hours".into()),
        feeling: Some(5),
        occurred_at: chrono::Utc::now(),
        created_at: chrono::Utc::now(),
    };

    let mock = MockAI::new().with_response(ai_answer(&base, 0));
    augment_scores(&mock, &user, &candidate, &[interaction], &base)
        .await
        .unwrap();

    let calls = mock.structured_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].user_prompt.contains("Dinner downtown"));
    assert!(calls[0].user_prompt.contains("felt 5/5"));
    assert!(calls[0].system_prompt.contains("at most 15 points"));
    // The tool schema mirrors the breakdown shape
    assert!(calls[0].schema["properties"]["breakdown"].is_object());
}

#[tokio::test]
async fn mock_ai_complete_is_usable_directly() {
    // Sanity check that the trait object surface works like production code uses it
    let mock: &dyn BaseAI = &MockAI::new().with_response("hello");
    assert_eq!(mock.complete("hi").await.unwrap(), "hello");
}
