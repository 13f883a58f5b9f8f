//! Per-user preference store routes.

use axum::extract::{Extension, Path};
use axum::Json;

use crate::common::ApiError;
use crate::domains::preferences::Preference;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// GET /api/preferences
pub async fn list_preferences(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Preference>>, ApiError> {
    let preferences = Preference::list_for_user(auth.user_id, &state.db_pool).await?;
    Ok(Json(preferences))
}

/// PUT /api/preferences/:key
pub async fn put_preference(
    Extension(state): Extension<AppState>,
    auth: AuthUser,
    Path(key): Path<String>,
    Json(value): Json<serde_json::Value>,
) -> Result<Json<Preference>, ApiError> {
    if key.trim().is_empty() || key.len() > 128 {
        return Err(ApiError::Invalid("preference key must be 1-128 chars".into()));
    }

    let preference = Preference::set(auth.user_id, &key, value, &state.db_pool).await?;
    Ok(Json(preference))
}
