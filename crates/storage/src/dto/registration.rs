use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Registration;

/// Request payload for registering a class's students into an event.
/// Roster-quality and capacity rules run against the target event after the
/// shape checks here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationRequest {
    pub class_id: Uuid,

    pub event_id: Uuid,

    #[validate(range(min = 2000, max = 2100, message = "Year is out of range"))]
    pub year: i32,

    #[validate(length(min = 1, message = "At least one student is required"))]
    pub students: Vec<String>,
}

/// Request payload for replacing the roster of an existing registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRegistrationRequest {
    #[validate(length(min = 1, message = "At least one student is required"))]
    pub students: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub registration_id: Uuid,
    pub class_id: Uuid,
    pub event_id: Uuid,
    pub year: i32,
    pub students: Vec<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        Self {
            registration_id: registration.registration_id,
            class_id: registration.class_id,
            event_id: registration.event_id,
            year: registration.year,
            students: registration.students,
            created_at: registration.created_at,
        }
    }
}
