use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Registration;

/// Repository for Registration database operations.
///
/// The unique index on (class_id, event_id, year) is the serialization point
/// for concurrent registration attempts: two requests may both pass the
/// capacity check, but only one insert can win.
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(
            r#"
            SELECT registration_id, class_id, event_id, year, students, created_at
            FROM registrations
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            SELECT registration_id, class_id, event_id, year, students, created_at
            FROM registrations
            WHERE registration_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    /// `students` must already be normalized by the roster validator.
    pub async fn create(
        &self,
        class_id: Uuid,
        event_id: Uuid,
        year: i32,
        students: &[String],
    ) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (class_id, event_id, year, students)
            VALUES ($1, $2, $3, $4)
            RETURNING registration_id, class_id, event_id, year, students, created_at
            "#,
        )
        .bind(class_id)
        .bind(event_id)
        .bind(year)
        .bind(students)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e)
                .on_unique("Class is already registered for this event and year")
        })?;

        Ok(registration)
    }

    pub async fn update_students(&self, id: Uuid, students: &[String]) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            UPDATE registrations
            SET students = $2
            WHERE registration_id = $1
            RETURNING registration_id, class_id, event_id, year, students, created_at
            "#,
        )
        .bind(id)
        .bind(students)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM registrations WHERE registration_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
