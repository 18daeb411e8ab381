use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A declared outcome for one event and year, unique per (event_id, year).
///
/// Group events store their ranking in `placings` (1st, 2nd, 3rd class in
/// order). Solo events leave `placings` empty and attach [`SoloPlacing`] rows
/// instead.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventResult {
    pub result_id: Uuid,
    pub event_id: Uuid,
    pub year: i32,
    pub placings: Vec<Uuid>,
    pub created_at: chrono::NaiveDateTime,
}

/// One placed student for a solo event. `position` is 1-indexed (1st..3rd).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SoloPlacing {
    pub result_id: Uuid,
    pub class_id: Uuid,
    pub student: String,
    pub position: i32,
}
