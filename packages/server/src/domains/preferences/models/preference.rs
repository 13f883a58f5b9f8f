use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::UserId;

/// A per-user key-value preference.
///
/// Backs small device/app flags (privacy notice acknowledged, app rated,
/// onboarding steps) that would otherwise live as ambient client-local
/// state. Values are arbitrary JSON.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Preference {
    pub user_id: UserId,
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl Preference {
    /// Fetch one preference
    pub async fn get(user_id: UserId, key: &str, pool: &PgPool) -> Result<Option<Self>> {
        let preference = sqlx::query_as::<_, Self>(
            "SELECT * FROM preferences WHERE user_id = $1 AND key = $2",
        )
        .bind(user_id)
        .bind(key)
        .fetch_optional(pool)
        .await?;
        Ok(preference)
    }

    /// List all preferences for a user
    pub async fn list_for_user(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        let preferences = sqlx::query_as::<_, Self>(
            "SELECT * FROM preferences WHERE user_id = $1 ORDER BY key ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(preferences)
    }

    /// Create or replace a preference
    pub async fn set(
        user_id: UserId,
        key: &str,
        value: serde_json::Value,
        pool: &PgPool,
    ) -> Result<Self> {
        let preference = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO preferences (user_id, key, value)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, key)
            DO UPDATE SET value = EXCLUDED.value, updated_at = now()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(key)
        .bind(value)
        .fetch_one(pool)
        .await?;
        Ok(preference)
    }
}
