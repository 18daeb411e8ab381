use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Class {
    pub class_id: Uuid,
    pub name: String,
    pub category: String,
    pub contact_email: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
}
