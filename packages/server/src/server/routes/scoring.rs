//! Compatibility scoring route.

use axum::extract::{Extension, Path};
use axum::Json;

use crate::common::{ApiError, CandidateId};
use crate::domains::scoring::{score_candidate, ScoreBreakdown};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// POST /api/candidates/:id/score
///
/// Computes the deterministic base scores, augments them through the AI
/// service (falling back to the base on service failure), persists the
/// result onto the candidate, and returns it.
pub async fn score_candidate_handler(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
    Path(candidate_id): Path<CandidateId>,
) -> Result<Json<ScoreBreakdown>, ApiError> {
    let analysis = score_candidate(&state.deps, auth.user_id, candidate_id).await?;
    Ok(Json(analysis))
}
