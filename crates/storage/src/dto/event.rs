use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Event;

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 3,
        max = 100,
        message = "Name must be between 3 and 100 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "super::validate_category"))]
    pub category: String,

    #[validate(custom(function = "validate_participation"))]
    pub participation: String,

    #[validate(length(
        min = 10,
        max = 500,
        message = "Description must be between 10 and 500 characters"
    ))]
    pub description: String,

    #[validate(length(min = 1, message = "At least one rule is required"))]
    pub rules: Vec<String>,

    #[validate(range(min = 1, message = "Minimum students must be at least 1"))]
    pub min_students: i32,

    #[validate(range(min = 1, message = "Maximum students must be at least 1"))]
    pub max_students: i32,

    #[validate(length(max = 200))]
    pub location: String,

    #[validate(custom(function = "validate_points_table"))]
    #[serde(default)]
    pub points: Vec<i32>,

    #[serde(default)]
    pub is_active: bool,
}

impl CreateEventRequest {
    /// Cross-field check the derive cannot express.
    pub fn validate_bounds(&self) -> Result<(), String> {
        if self.max_students < self.min_students {
            return Err("max_students must be >= min_students".to_string());
        }
        Ok(())
    }
}

/// Request payload for updating an existing event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(length(min = 3, max = 100))]
    pub name: Option<String>,

    #[validate(custom(function = "super::validate_category"))]
    pub category: Option<String>,

    #[validate(custom(function = "validate_participation"))]
    pub participation: Option<String>,

    #[validate(length(min = 10, max = 500))]
    pub description: Option<String>,

    #[validate(length(min = 1))]
    pub rules: Option<Vec<String>>,

    #[validate(range(min = 1))]
    pub min_students: Option<i32>,

    #[validate(range(min = 1))]
    pub max_students: Option<i32>,

    #[validate(length(max = 200))]
    pub location: Option<String>,

    #[validate(custom(function = "validate_points_table"))]
    pub points: Option<Vec<i32>>,

    pub is_active: Option<bool>,
}

impl UpdateEventRequest {
    /// Checks the capacity bounds as they will stand after this update is
    /// merged over the stored values, so a partial update cannot leave
    /// min/max crossed.
    pub fn validate_bounds(&self, current_min: i32, current_max: i32) -> Result<(), String> {
        let min = self.min_students.unwrap_or(current_min);
        let max = self.max_students.unwrap_or(current_max);

        if max < min {
            return Err("max_students must be >= min_students".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
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

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            name: event.name,
            category: event.category,
            participation: event.participation,
            description: event.description,
            rules: event.rules,
            min_students: event.min_students,
            max_students: event.max_students,
            location: event.location,
            points: event.points,
            is_active: event.is_active,
            created_at: event.created_at,
        }
    }
}

// Validation helpers

fn validate_participation(participation: &str) -> Result<(), validator::ValidationError> {
    const VALID: &[&str] = &["Group", "Solo"];

    if VALID.contains(&participation) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_participation"))
    }
}

/// An empty table means the event is not scored; otherwise exactly three
/// non-negative values in non-increasing order.
fn validate_points_table(points: &Vec<i32>) -> Result<(), validator::ValidationError> {
    if points.is_empty() {
        return Ok(());
    }

    let well_formed = points.len() == 3
        && points.iter().all(|p| *p >= 0)
        && points[0] >= points[1]
        && points[1] >= points[2];

    if well_formed {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_points_table"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_table_accepts_empty_and_podium_shape() {
        assert!(validate_points_table(&vec![]).is_ok());
        assert!(validate_points_table(&vec![10, 6, 3]).is_ok());
        assert!(validate_points_table(&vec![5, 5, 5]).is_ok());
    }

    #[test]
    fn test_points_table_rejects_bad_shapes() {
        assert!(validate_points_table(&vec![10, 6]).is_err());
        assert!(validate_points_table(&vec![10, 6, 3, 1]).is_err());
        assert!(validate_points_table(&vec![3, 6, 10]).is_err());
        assert!(validate_points_table(&vec![10, -1, -2]).is_err());
    }

    fn bounds_update(min: Option<i32>, max: Option<i32>) -> UpdateEventRequest {
        UpdateEventRequest {
            name: None,
            category: None,
            participation: None,
            description: None,
            rules: None,
            min_students: min,
            max_students: max,
            location: None,
            points: None,
            is_active: None,
        }
    }

    #[test]
    fn test_update_bounds_merge_with_stored_values() {
        // stored event has min 2, max 4
        assert!(bounds_update(Some(3), None).validate_bounds(2, 4).is_ok());
        assert!(bounds_update(None, Some(2)).validate_bounds(2, 4).is_ok());
        assert!(bounds_update(Some(3), Some(6)).validate_bounds(2, 4).is_ok());
    }

    #[test]
    fn test_update_bounds_rejects_crossed_result() {
        assert!(bounds_update(Some(5), None).validate_bounds(2, 4).is_err());
        assert!(bounds_update(None, Some(1)).validate_bounds(2, 4).is_err());
        assert!(bounds_update(Some(6), Some(3)).validate_bounds(2, 4).is_err());
    }

    #[test]
    fn test_participation_values() {
        assert!(validate_participation("Group").is_ok());
        assert!(validate_participation("Solo").is_ok());
        assert!(validate_participation("Team").is_err());
        assert!(validate_participation("solo").is_err());
    }
}
