//! PostgreSQL Repository Implementation

use std::collections::BTreeMap;

use auth::domain::value_object::name::Name;
use kernel::id::HueRecordId;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::{hue_record::HueRecord, submission::HueResultSubmission};
use crate::domain::repository::HueRecordRepository;
use crate::domain::value_object::{hue_choices::HueChoices, record_range::RecordRange};
use crate::error::{HueError, HueResult};

/// PostgreSQL-backed hue record repository
#[derive(Clone)]
pub struct PgHueRepository {
    pool: PgPool,
}

impl PgHueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl HueRecordRepository for PgHueRepository {
    async fn save(&self, submission: &HueResultSubmission) -> HueResult<()> {
        let record = submission.record();

        sqlx::query(
            r#"
            INSERT INTO hue_records (
                id,
                user_name,
                choices,
                user_data
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.name().as_str())
        .bind(Json(record.choice_map()))
        .bind(Json(submission.user_data().to_json()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_range(&self, range: &RecordRange) -> HueResult<Vec<HueRecord>> {
        let rows = sqlx::query_as::<_, HueRecordRow>(
            r#"
            SELECT
                id,
                user_name,
                choices
            FROM hue_records
            ORDER BY created_at, id
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(range.begin())
        .bind(range.count())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_record()).collect()
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct HueRecordRow {
    id: Uuid,
    user_name: String,
    choices: Json<BTreeMap<String, String>>,
}

impl HueRecordRow {
    fn into_record(self) -> HueResult<HueRecord> {
        let name = Name::new(&self.user_name)
            .map_err(|e| HueError::Internal(format!("Invalid user_name in storage: {}", e.message())))?;
        let choices = HueChoices::from_map(&self.choices.0)
            .map_err(|e| HueError::Internal(format!("Invalid choices in storage: {e}")))?;

        HueRecord::from_persistence(HueRecordId::from_uuid(self.id), name, choices)
    }
}
