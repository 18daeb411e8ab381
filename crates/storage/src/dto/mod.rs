pub mod class;
pub mod event;
pub mod registration;
pub mod result;
pub mod standings;

use crate::models::Category;

/// Shared validator for TEXT-typed category fields on request payloads.
pub fn validate_category(category: &str) -> Result<(), validator::ValidationError> {
    match Category::parse(category) {
        Ok(_) => Ok(()),
        Err(_) => Err(validator::ValidationError::new("invalid_category")),
    }
}
