//! The journal owner's profile.

use axum::{extract::Extension, Json};

use crate::common::ApiError;
use crate::domains::profiles::{UpsertProfile, UserProfile};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// GET /api/profile
pub async fn get_profile(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = UserProfile::find_by_user(auth.user_id, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("profile"))?;
    Ok(Json(profile))
}

/// PUT /api/profile
pub async fn put_profile(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
    Json(input): Json<UpsertProfile>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = UserProfile::upsert(auth.user_id, input, &state.db_pool).await?;
    Ok(Json(profile))
}
