use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Class;

/// Request payload for creating a new class
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClassRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Name must be between 3 and 50 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "super::validate_category"))]
    pub category: String,

    #[validate(email(message = "Contact email must be a valid email address"))]
    pub contact_email: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Request payload for updating an existing class
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateClassRequest {
    #[validate(length(min = 3, max = 50))]
    pub name: Option<String>,

    #[validate(custom(function = "super::validate_category"))]
    pub category: Option<String>,

    #[validate(email)]
    pub contact_email: Option<String>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassResponse {
    pub class_id: Uuid,
    pub name: String,
    pub category: String,
    pub contact_email: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Class> for ClassResponse {
    fn from(class: Class) -> Self {
        Self {
            class_id: class.class_id,
            name: class.name,
            category: class.category,
            contact_email: class.contact_email,
            is_active: class.is_active,
            created_at: class.created_at,
        }
    }
}

fn default_active() -> bool {
    true
}
