//! The scoring operation: load, compute, augment, persist, return.

use crate::common::{ApiError, CandidateId, UserId};
use crate::domains::candidates::{Candidate, Interaction};
use crate::domains::profiles::UserProfile;
use crate::domains::scoring::augment::augment_scores;
use crate::domains::scoring::scorer::compute_base_scores;
use crate::domains::scoring::types::ScoreBreakdown;
use crate::kernel::ServerDeps;

/// Compute an AI-augmented compatibility analysis for a candidate and
/// persist it onto the candidate row.
///
/// One synchronous computation, at most one AI call, one write. Concurrent
/// invocations for the same candidate are not coordinated; the later write
/// wins. Persistence is best-effort: a failed write is logged and the
/// computed analysis is still returned.
pub async fn score_candidate(
    deps: &ServerDeps,
    user_id: UserId,
    candidate_id: CandidateId,
) -> Result<ScoreBreakdown, ApiError> {
    let profile = UserProfile::find_by_user(user_id, &deps.db_pool)
        .await?
        .ok_or(ApiError::NotFound("profile"))?;

    let candidate = Candidate::find_for_user(candidate_id, user_id, &deps.db_pool)
        .await?
        .ok_or(ApiError::NotFound("candidate"))?;

    let interactions = Interaction::find_for_candidate(candidate_id, &deps.db_pool).await?;

    let base = compute_base_scores(&profile, &candidate);
    tracing::debug!(
        candidate_id = %candidate_id,
        overall = base.overall_score,
        "Computed base compatibility scores"
    );

    let analysis =
        augment_scores(deps.ai.as_ref(), &profile, &candidate, &interactions, &base).await?;

    if let Err(err) = Candidate::save_scores(candidate_id, &analysis, &deps.db_pool).await {
        tracing::warn!(
            error = %err,
            candidate_id = %candidate_id,
            "Failed to persist compatibility analysis; returning it anyway"
        );
    }

    tracing::info!(
        candidate_id = %candidate_id,
        overall = analysis.overall_score,
        "Compatibility analysis complete"
    );

    Ok(analysis)
}
