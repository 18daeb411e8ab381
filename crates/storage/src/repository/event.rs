use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::{CreateEventRequest, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::{Category, Event};

const EVENT_COLUMNS: &str = "event_id, name, category, participation, description, rules, \
                             min_students, max_students, location, points, is_active, created_at";

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List active events, newest first
    pub async fn list_active(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE is_active ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Active events of one category. The standings service filters these
    /// down further to events with a points table.
    pub async fn find_active_by_category(&self, category: Category) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE is_active AND category = $1 ORDER BY name ASC"
        ))
        .bind(category.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE event_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (
                name, category, participation, description, rules,
                min_students, max_students, location, points, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.category)
        .bind(&req.participation)
        .bind(&req.description)
        .bind(&req.rules)
        .bind(req.min_students)
        .bind(req.max_students)
        .bind(&req.location)
        .bind(&req.points)
        .bind(req.is_active)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique("Event name already exists for this category")
        })?;

        Ok(event)
    }

    pub async fn update(&self, id: Uuid, req: &UpdateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                participation = COALESCE($4, participation),
                description = COALESCE($5, description),
                rules = COALESCE($6, rules),
                min_students = COALESCE($7, min_students),
                max_students = COALESCE($8, max_students),
                location = COALESCE($9, location),
                points = COALESCE($10, points),
                is_active = COALESCE($11, is_active)
            WHERE event_id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&req.name)
        .bind(&req.category)
        .bind(&req.participation)
        .bind(&req.description)
        .bind(&req.rules)
        .bind(req.min_students)
        .bind(req.max_students)
        .bind(&req.location)
        .bind(&req.points)
        .bind(req.is_active)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique("Event name already exists for this category")
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
