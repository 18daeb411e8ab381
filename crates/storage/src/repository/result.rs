use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{EventResult, SoloPlacing};
use crate::services::outcome::ProposedPlacing;

const RESULT_COLUMNS: &str = "result_id, event_id, year, placings, created_at";

/// Repository for Result database operations. The unique index on
/// (event_id, year) makes the Undeclared -> Declared transition happen at
/// most once per pair.
pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<EventResult> {
        let result = sqlx::query_as::<_, EventResult>(&format!(
            "SELECT {RESULT_COLUMNS} FROM results WHERE result_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(result)
    }

    pub async fn find_by_event_and_year(&self, event_id: Uuid, year: i32) -> Result<EventResult> {
        let result = sqlx::query_as::<_, EventResult>(&format!(
            "SELECT {RESULT_COLUMNS} FROM results WHERE event_id = $1 AND year = $2"
        ))
        .bind(event_id)
        .bind(year)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(result)
    }

    /// Declared results for one year restricted to the given events, with
    /// their solo placings attached. This is the standings aggregator's input.
    pub async fn find_declared_for_events(
        &self,
        year: i32,
        event_ids: &[Uuid],
    ) -> Result<Vec<(EventResult, Vec<SoloPlacing>)>> {
        let results = sqlx::query_as::<_, EventResult>(&format!(
            r#"
            SELECT {RESULT_COLUMNS}
            FROM results
            WHERE year = $1 AND event_id = ANY($2)
            "#
        ))
        .bind(year)
        .bind(event_ids)
        .fetch_all(self.pool)
        .await?;

        let mut declared = Vec::with_capacity(results.len());
        for result in results {
            let placings = self.solo_placings(result.result_id).await?;
            declared.push((result, placings));
        }

        Ok(declared)
    }

    pub async fn solo_placings(&self, result_id: Uuid) -> Result<Vec<SoloPlacing>> {
        let placings = sqlx::query_as::<_, SoloPlacing>(
            r#"
            SELECT result_id, class_id, student, position
            FROM solo_placings
            WHERE result_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(result_id)
        .fetch_all(self.pool)
        .await?;

        Ok(placings)
    }

    /// Declares a result. Group rankings pass the placings and an empty solo
    /// set; solo events the reverse. Runs in one transaction so a result is
    /// never visible without its placings.
    pub async fn create(
        &self,
        event_id: Uuid,
        year: i32,
        placings: &[Uuid],
        solo_placings: &[ProposedPlacing],
    ) -> Result<EventResult> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query_as::<_, EventResult>(&format!(
            r#"
            INSERT INTO results (event_id, year, placings)
            VALUES ($1, $2, $3)
            RETURNING {RESULT_COLUMNS}
            "#
        ))
        .bind(event_id)
        .bind(year)
        .bind(placings)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique("Result already declared for this event and year")
        })?;

        for placing in solo_placings {
            sqlx::query(
                "INSERT INTO solo_placings (result_id, class_id, student, position) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(result.result_id)
            .bind(placing.class_id)
            .bind(&placing.student)
            .bind(placing.position)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(result)
    }

    /// Replaces the outcome of an existing result, keeping its event/year
    /// identity.
    pub async fn replace_outcome(
        &self,
        result_id: Uuid,
        placings: &[Uuid],
        solo_placings: &[ProposedPlacing],
    ) -> Result<EventResult> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query_as::<_, EventResult>(&format!(
            r#"
            UPDATE results
            SET placings = $2
            WHERE result_id = $1
            RETURNING {RESULT_COLUMNS}
            "#
        ))
        .bind(result_id)
        .bind(placings)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        sqlx::query("DELETE FROM solo_placings WHERE result_id = $1")
            .bind(result_id)
            .execute(&mut *tx)
            .await?;

        for placing in solo_placings {
            sqlx::query(
                "INSERT INTO solo_placings (result_id, class_id, student, position) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(result_id)
            .bind(placing.class_id)
            .bind(&placing.student)
            .bind(placing.position)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(result)
    }

    /// Removes a declaration, returning the (event, year) pair to Undeclared.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM results WHERE result_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
