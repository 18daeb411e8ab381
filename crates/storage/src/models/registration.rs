use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A class's enrollment of students into one event for one season. The
/// database enforces at most one registration per (class, event, year).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
    pub registration_id: Uuid,
    pub class_id: Uuid,
    pub event_id: Uuid,
    pub year: i32,
    pub students: Vec<String>,
    pub created_at: chrono::NaiveDateTime,
}
