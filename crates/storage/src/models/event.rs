use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An event as stored. `points` is either empty (the event is not scored and
/// never contributes to standings) or exactly three non-increasing values for
/// 1st/2nd/3rd place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub name: String,
    pub category: String,
    pub participation: String,
    pub description: String,
    pub rules: Vec<String>,
    pub min_students: i32,
    pub max_students: i32,
    pub location: String,
    pub points: Vec<i32>,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
}

impl Event {
    /// Whether this event carries a points table and counts towards standings.
    pub fn is_scored(&self) -> bool {
        !self.points.is_empty()
    }
}
