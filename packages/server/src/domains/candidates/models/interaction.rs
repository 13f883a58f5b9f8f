use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CandidateId, InteractionId};

/// A logged interaction with a candidate (date, call, text thread, ...).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Interaction {
    pub id: InteractionId,
    pub candidate_id: CandidateId,
    /// Free-form kind: date, call, text, video, other
    pub interaction_type: String,
    pub title: Option<String>,
    pub notes: Option<String>,
    /// How it felt, 1-5
    pub feeling: Option<i16>,
    pub occurred_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for logging a new interaction
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInteraction {
    pub interaction_type: String,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub feeling: Option<i16>,
    pub occurred_at: Option<DateTime<Utc>>,
}

impl Interaction {
    /// Log a new interaction for a candidate
    pub async fn create(
        candidate_id: CandidateId,
        input: CreateInteraction,
        pool: &PgPool,
    ) -> Result<Self> {
        let interaction = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO interactions (candidate_id, interaction_type, title, notes, feeling, occurred_at)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, now()))
            RETURNING *
            "#,
        )
        .bind(candidate_id)
        .bind(&input.interaction_type)
        .bind(&input.title)
        .bind(&input.notes)
        .bind(input.feeling)
        .bind(input.occurred_at)
        .fetch_one(pool)
        .await?;
        Ok(interaction)
    }

    /// All interactions for a candidate, oldest first (chronological history)
    pub async fn find_for_candidate(
        candidate_id: CandidateId,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let interactions = sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM interactions
            WHERE candidate_id = $1
            ORDER BY occurred_at ASC, created_at ASC
            "#,
        )
        .bind(candidate_id)
        .fetch_all(pool)
        .await?;
        Ok(interactions)
    }
}
