//! Candidate CRUD.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;

use crate::common::{ApiError, CandidateId};
use crate::domains::candidates::{Candidate, CreateCandidate, UpdateCandidate};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// GET /api/candidates
pub async fn list_candidates(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Candidate>>, ApiError> {
    let candidates = Candidate::list_for_user(auth.user_id, &state.db_pool).await?;
    Ok(Json(candidates))
}

/// POST /api/candidates
pub async fn create_candidate(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateCandidate>,
) -> Result<(StatusCode, Json<Candidate>), ApiError> {
    if input.name.trim().is_empty() {
        return Err(ApiError::Invalid("candidate name is required".into()));
    }

    let candidate = Candidate::create(auth.user_id, input, &state.db_pool).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

/// GET /api/candidates/:id
pub async fn get_candidate(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
    Path(id): Path<CandidateId>,
) -> Result<Json<Candidate>, ApiError> {
    let candidate = Candidate::find_for_user(id, auth.user_id, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("candidate"))?;
    Ok(Json(candidate))
}

/// PUT /api/candidates/:id
pub async fn update_candidate(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
    Path(id): Path<CandidateId>,
    Json(input): Json<UpdateCandidate>,
) -> Result<Json<Candidate>, ApiError> {
    let candidate = Candidate::update(id, auth.user_id, input, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("candidate"))?;
    Ok(Json(candidate))
}

/// DELETE /api/candidates/:id
pub async fn delete_candidate(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
    Path(id): Path<CandidateId>,
) -> Result<StatusCode, ApiError> {
    let deleted = Candidate::delete(id, auth.user_id, &state.db_pool).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("candidate"))
    }
}
