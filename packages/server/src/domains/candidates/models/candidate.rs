use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CandidateId, UserId};
use crate::domains::flags::FlagAnalysis;
use crate::domains::scoring::ScoreBreakdown;

/// A person the journal owner is dating/evaluating.
///
/// Mirrors the owner's profile categories with a `their_` prefix, plus five
/// 1-5 chemistry ratings. Scoring and flag output is denormalized onto the
/// row; each scoring run fully replaces the previous values
/// (last-write-wins, no version check).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Candidate {
    pub id: CandidateId,
    pub user_id: UserId,
    pub name: String,
    /// Where things stand: talking, dating, exclusive, ended
    pub status: String,
    pub notes: Option<String>,

    // Mirrored profile fields
    pub their_relationship_goal: Option<String>,
    pub their_religion: Option<String>,
    pub their_politics: Option<String>,
    pub their_kids_status: Option<String>,
    pub their_kids_desire: Option<String>,
    pub their_attachment_style: Option<String>,
    pub their_exercise_habit: Option<String>,
    pub their_education_level: Option<String>,
    pub their_ambition_level: Option<i16>,
    pub their_height: Option<i16>,

    // Chemistry ratings, 1-5 (default to 3 when unset)
    pub physical_attraction: Option<i16>,
    pub intellectual_connection: Option<i16>,
    pub humor_compatibility: Option<i16>,
    pub energy_match: Option<i16>,
    pub overall_chemistry: Option<i16>,

    // Last compatibility analysis
    pub overall_score: Option<i32>,
    pub values_alignment: Option<i32>,
    pub lifestyle_compatibility: Option<i32>,
    pub emotional_compatibility: Option<i32>,
    pub chemistry_score: Option<i32>,
    pub future_goals: Option<i32>,
    pub strengths: Option<serde_json::Value>,
    pub concerns: Option<serde_json::Value>,
    pub advice: Option<String>,
    pub scored_at: Option<DateTime<Utc>>,

    // Last flag analysis
    pub red_flags: Option<serde_json::Value>,
    pub green_flags: Option<serde_json::Value>,
    pub flags_updated_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a candidate
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCandidate {
    pub name: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub notes: Option<String>,
}

fn default_status() -> String {
    "talking".to_string()
}

/// Input for updating a candidate's journal and profile fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCandidate {
    pub name: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub their_relationship_goal: Option<String>,
    pub their_religion: Option<String>,
    pub their_politics: Option<String>,
    pub their_kids_status: Option<String>,
    pub their_kids_desire: Option<String>,
    pub their_attachment_style: Option<String>,
    pub their_exercise_habit: Option<String>,
    pub their_education_level: Option<String>,
    pub their_ambition_level: Option<i16>,
    pub their_height: Option<i16>,
    pub physical_attraction: Option<i16>,
    pub intellectual_connection: Option<i16>,
    pub humor_compatibility: Option<i16>,
    pub energy_match: Option<i16>,
    pub overall_chemistry: Option<i16>,
}

impl Candidate {
    /// Find a candidate by ID, scoped to its owner.
    ///
    /// A candidate belonging to another user is indistinguishable from a
    /// missing one.
    pub async fn find_for_user(
        id: CandidateId,
        user_id: UserId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let candidate = sqlx::query_as::<_, Self>(
            "SELECT * FROM candidates WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
        Ok(candidate)
    }

    /// List all candidates for a user, most recent first
    pub async fn list_for_user(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        let candidates = sqlx::query_as::<_, Self>(
            "SELECT * FROM candidates WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(candidates)
    }

    /// Create a new candidate
    pub async fn create(user_id: UserId, input: CreateCandidate, pool: &PgPool) -> Result<Self> {
        let candidate = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO candidates (user_id, name, status, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.status)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;
        Ok(candidate)
    }

    /// Update journal and profile fields; absent input fields keep their value
    pub async fn update(
        id: CandidateId,
        user_id: UserId,
        input: UpdateCandidate,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let candidate = sqlx::query_as::<_, Self>(
            r#"
            UPDATE candidates SET
                name = COALESCE($3, name),
                status = COALESCE($4, status),
                notes = COALESCE($5, notes),
                their_relationship_goal = COALESCE($6, their_relationship_goal),
                their_religion = COALESCE($7, their_religion),
                their_politics = COALESCE($8, their_politics),
                their_kids_status = COALESCE($9, their_kids_status),
                their_kids_desire = COALESCE($10, their_kids_desire),
                their_attachment_style = COALESCE($11, their_attachment_style),
                their_exercise_habit = COALESCE($12, their_exercise_habit),
                their_education_level = COALESCE($13, their_education_level),
                their_ambition_level = COALESCE($14, their_ambition_level),
                their_height = COALESCE($15, their_height),
                physical_attraction = COALESCE($16, physical_attraction),
                intellectual_connection = COALESCE($17, intellectual_connection),
                humor_compatibility = COALESCE($18, humor_compatibility),
                energy_match = COALESCE($19, energy_match),
                overall_chemistry = COALESCE($20, overall_chemistry),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.status)
        .bind(&input.notes)
        .bind(&input.their_relationship_goal)
        .bind(&input.their_religion)
        .bind(&input.their_politics)
        .bind(&input.their_kids_status)
        .bind(&input.their_kids_desire)
        .bind(&input.their_attachment_style)
        .bind(&input.their_exercise_habit)
        .bind(&input.their_education_level)
        .bind(input.their_ambition_level)
        .bind(input.their_height)
        .bind(input.physical_attraction)
        .bind(input.intellectual_connection)
        .bind(input.humor_compatibility)
        .bind(input.energy_match)
        .bind(input.overall_chemistry)
        .fetch_optional(pool)
        .await?;
        Ok(candidate)
    }

    /// Delete a candidate (and its interactions, via FK cascade)
    pub async fn delete(id: CandidateId, user_id: UserId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Persist a compatibility analysis onto the candidate row.
    ///
    /// Fully replaces the previous analysis; the caller treats failure as
    /// non-fatal (the computed result is still returned to the user).
    pub async fn save_scores(
        id: CandidateId,
        analysis: &ScoreBreakdown,
        pool: &PgPool,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE candidates SET
                overall_score = $2,
                values_alignment = $3,
                lifestyle_compatibility = $4,
                emotional_compatibility = $5,
                chemistry_score = $6,
                future_goals = $7,
                strengths = $8,
                concerns = $9,
                advice = $10,
                scored_at = now(),
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(analysis.overall_score)
        .bind(analysis.breakdown.values_alignment)
        .bind(analysis.breakdown.lifestyle_compatibility)
        .bind(analysis.breakdown.emotional_compatibility)
        .bind(analysis.breakdown.chemistry_score)
        .bind(analysis.breakdown.future_goals)
        .bind(serde_json::to_value(&analysis.strengths)?)
        .bind(serde_json::to_value(&analysis.concerns)?)
        .bind(&analysis.advice)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Persist a flag analysis onto the candidate row
    pub async fn save_flags(id: CandidateId, flags: &FlagAnalysis, pool: &PgPool) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE candidates SET
                red_flags = $2,
                green_flags = $3,
                flags_updated_at = now(),
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(serde_json::to_value(&flags.red_flags)?)
        .bind(serde_json::to_value(&flags.green_flags)?)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// A blank candidate with no profile fields set (all unknown).
    ///
    /// Used by tests and as the neutral scoring input.
    pub fn blank(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: CandidateId::new(),
            user_id,
            name: name.into(),
            status: "talking".to_string(),
            notes: None,
            their_relationship_goal: None,
            their_religion: None,
            their_politics: None,
            their_kids_status: None,
            their_kids_desire: None,
            their_attachment_style: None,
            their_exercise_habit: None,
            their_education_level: None,
            their_ambition_level: None,
            their_height: None,
            physical_attraction: None,
            intellectual_connection: None,
            humor_compatibility: None,
            energy_match: None,
            overall_chemistry: None,
            overall_score: None,
            values_alignment: None,
            lifestyle_compatibility: None,
            emotional_compatibility: None,
            chemistry_score: None,
            future_goals: None,
            strengths: None,
            concerns: None,
            advice: None,
            scored_at: None,
            red_flags: None,
            green_flags: None,
            flags_updated_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
