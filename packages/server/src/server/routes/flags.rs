//! Flag detection route.

use axum::extract::{Extension, Path};
use axum::Json;

use crate::common::{ApiError, CandidateId};
use crate::domains::flags::{analyze_candidate_flags, FlagAnalysis};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// POST /api/candidates/:id/flags
///
/// Sends the candidate's interaction history to the AI service for red/green
/// flag classification and persists the result. There is no local fallback;
/// service failure surfaces to the user, who can retry.
pub async fn analyze_flags_handler(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
    Path(candidate_id): Path<CandidateId>,
) -> Result<Json<FlagAnalysis>, ApiError> {
    let flags = analyze_candidate_flags(&state.deps, auth.user_id, candidate_id).await?;
    Ok(Json(flags))
}
