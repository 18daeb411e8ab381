use sqlx::PgPool;
use storage::{
    dto::registration::{CreateRegistrationRequest, UpdateRegistrationRequest},
    error::Result,
    models::Registration,
    repository::{
        class::ClassRepository, event::EventRepository, registration::RegistrationRepository,
    },
    services::roster,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// List all registrations
pub async fn list_registrations(pool: &PgPool) -> Result<Vec<Registration>> {
    let repo = RegistrationRepository::new(pool);
    repo.list().await
}

/// Get a registration by id
pub async fn get_registration(pool: &PgPool, id: Uuid) -> Result<Registration> {
    let repo = RegistrationRepository::new(pool);
    repo.find_by_id(id).await
}

/// Register a class for an event. Referenced class and event must exist, and
/// the roster must pass the capacity rules of the event, before anything is
/// written. The unique index on (class, event, year) catches concurrent
/// duplicates and surfaces them as a conflict.
pub async fn create_registration(
    pool: &PgPool,
    request: &CreateRegistrationRequest,
) -> WebResult<Registration> {
    ClassRepository::new(pool)
        .find_by_id(request.class_id)
        .await?;
    let event = EventRepository::new(pool).find_by_id(request.event_id).await?;

    if !event.is_active {
        return Err(WebError::BadRequest(
            "Event is not open for registration".to_string(),
        ));
    }

    let students = roster::validate_roster(event.min_students, event.max_students, &request.students)?;

    let registration = RegistrationRepository::new(pool)
        .create(request.class_id, request.event_id, request.year, &students)
        .await?;

    Ok(registration)
}

/// Replace the roster of an existing registration, re-checked against the
/// event's current bounds.
pub async fn update_registration(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateRegistrationRequest,
) -> WebResult<Registration> {
    let repo = RegistrationRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    let event = EventRepository::new(pool).find_by_id(existing.event_id).await?;

    let students = roster::validate_roster(event.min_students, event.max_students, &request.students)?;

    let registration = repo.update_students(id, &students).await?;

    Ok(registration)
}

/// Delete a registration
pub async fn delete_registration(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = RegistrationRepository::new(pool);
    repo.delete(id).await
}
