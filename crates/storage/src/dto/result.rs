use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{EventResult, SoloPlacing};

/// One solo placing as submitted by the convenor. Position is 1-indexed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SoloPlacingRequest {
    pub class_id: Uuid,

    #[validate(length(min = 1, message = "Student name is required"))]
    pub student: String,

    #[validate(range(min = 1, max = 3, message = "Position must be 1, 2 or 3"))]
    pub position: i32,
}

/// Request payload for declaring a result. Exactly one of `placings` (group
/// ranking, 1st to 3rd) or `solo_placings` must be supplied.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeclareResultRequest {
    pub event_id: Uuid,

    #[validate(range(min = 2000, max = 2100, message = "Year is out of range"))]
    pub year: i32,

    #[serde(default)]
    pub placings: Vec<Uuid>,

    #[serde(default)]
    #[validate(nested)]
    pub solo_placings: Vec<SoloPlacingRequest>,
}

/// Request payload for replacing the outcome of a declared result. The
/// event/year identity is immutable; only the outcome changes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateResultRequest {
    #[serde(default)]
    pub placings: Vec<Uuid>,

    #[serde(default)]
    #[validate(nested)]
    pub solo_placings: Vec<SoloPlacingRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SoloPlacingResponse {
    pub class_id: Uuid,
    pub student: String,
    pub position: i32,
}

impl From<SoloPlacing> for SoloPlacingResponse {
    fn from(placing: SoloPlacing) -> Self {
        Self {
            class_id: placing.class_id,
            student: placing.student,
            position: placing.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultResponse {
    pub result_id: Uuid,
    pub event_id: Uuid,
    pub year: i32,
    pub placings: Vec<Uuid>,
    pub solo_placings: Vec<SoloPlacingResponse>,
    pub created_at: chrono::NaiveDateTime,
}

impl ResultResponse {
    pub fn from_parts(result: EventResult, solo_placings: Vec<SoloPlacing>) -> Self {
        Self {
            result_id: result.result_id,
            event_id: result.event_id,
            year: result.year,
            placings: result.placings,
            solo_placings: solo_placings
                .into_iter()
                .map(SoloPlacingResponse::from)
                .collect(),
            created_at: result.created_at,
        }
    }
}
