use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::UserId;

/// The journal owner's dating profile.
///
/// Every preference field is nullable: absence means "unknown" and is never
/// treated as a mismatch by the compatibility scorer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub user_id: UserId,
    pub relationship_goal: Option<String>,
    pub religion: Option<String>,
    /// How much shared faith matters, 1-5
    pub faith_importance: Option<i16>,
    pub politics: Option<String>,
    /// How much political alignment matters, 1-5
    pub politics_importance: Option<i16>,
    pub kids_status: Option<String>,
    pub kids_desire: Option<String>,
    pub attachment_style: Option<String>,
    pub ambition_level: Option<i16>,
    pub activity_level: Option<String>,
    pub education_level: Option<String>,
    pub education_matters: Option<bool>,
    pub height_preference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or replacing a profile
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertProfile {
    pub relationship_goal: Option<String>,
    pub religion: Option<String>,
    pub faith_importance: Option<i16>,
    pub politics: Option<String>,
    pub politics_importance: Option<i16>,
    pub kids_status: Option<String>,
    pub kids_desire: Option<String>,
    pub attachment_style: Option<String>,
    pub ambition_level: Option<i16>,
    pub activity_level: Option<String>,
    pub education_level: Option<String>,
    pub education_matters: Option<bool>,
    pub height_preference: Option<String>,
}

impl UserProfile {
    /// Find the profile for a user
    pub async fn find_by_user(user_id: UserId, pool: &PgPool) -> Result<Option<Self>> {
        let profile =
            sqlx::query_as::<_, Self>("SELECT * FROM user_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(pool)
                .await?;
        Ok(profile)
    }

    /// Create or fully replace the profile for a user
    pub async fn upsert(user_id: UserId, input: UpsertProfile, pool: &PgPool) -> Result<Self> {
        let profile = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO user_profiles (
                user_id, relationship_goal, religion, faith_importance,
                politics, politics_importance, kids_status, kids_desire,
                attachment_style, ambition_level, activity_level,
                education_level, education_matters, height_preference
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (user_id)
            DO UPDATE SET
                relationship_goal = EXCLUDED.relationship_goal,
                religion = EXCLUDED.religion,
                faith_importance = EXCLUDED.faith_importance,
                politics = EXCLUDED.politics,
                politics_importance = EXCLUDED.politics_importance,
                kids_status = EXCLUDED.kids_status,
                kids_desire = EXCLUDED.kids_desire,
                attachment_style = EXCLUDED.attachment_style,
                ambition_level = EXCLUDED.ambition_level,
                activity_level = EXCLUDED.activity_level,
                education_level = EXCLUDED.education_level,
                education_matters = EXCLUDED.education_matters,
                height_preference = EXCLUDED.height_preference,
                updated_at = now()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&input.relationship_goal)
        .bind(&input.religion)
        .bind(input.faith_importance)
        .bind(&input.politics)
        .bind(input.politics_importance)
        .bind(&input.kids_status)
        .bind(&input.kids_desire)
        .bind(&input.attachment_style)
        .bind(input.ambition_level)
        .bind(&input.activity_level)
        .bind(&input.education_level)
        .bind(input.education_matters)
        .bind(&input.height_preference)
        .fetch_one(pool)
        .await?;
        Ok(profile)
    }

    /// An empty profile for a user (all preferences unknown).
    ///
    /// Used by tests and as the neutral scoring input.
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            relationship_goal: None,
            religion: None,
            faith_importance: None,
            politics: None,
            politics_importance: None,
            kids_status: None,
            kids_desire: None,
            attachment_style: None,
            ambition_level: None,
            activity_level: None,
            education_level: None,
            education_matters: None,
            height_preference: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
