//! Interaction log routes.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;

use crate::common::{ApiError, CandidateId};
use crate::domains::candidates::{Candidate, CreateInteraction, Interaction};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// GET /api/candidates/:id/interactions
pub async fn list_interactions(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
    Path(candidate_id): Path<CandidateId>,
) -> Result<Json<Vec<Interaction>>, ApiError> {
    // Ownership check before touching the log
    Candidate::find_for_user(candidate_id, auth.user_id, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("candidate"))?;

    let interactions = Interaction::find_for_candidate(candidate_id, &state.db_pool).await?;
    Ok(Json(interactions))
}

/// POST /api/candidates/:id/interactions
pub async fn create_interaction(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
    Path(candidate_id): Path<CandidateId>,
    Json(input): Json<CreateInteraction>,
) -> Result<(StatusCode, Json<Interaction>), ApiError> {
    Candidate::find_for_user(candidate_id, auth.user_id, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("candidate"))?;

    if input.interaction_type.trim().is_empty() {
        return Err(ApiError::Invalid("interaction_type is required".into()));
    }

    let interaction = Interaction::create(candidate_id, input, &state.db_pool).await?;
    Ok((StatusCode::CREATED, Json(interaction)))
}
