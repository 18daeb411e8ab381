use sqlx::PgPool;
use storage::{
    dto::event::{CreateEventRequest, UpdateEventRequest},
    error::Result,
    models::{Category, Event},
    repository::{class::ClassRepository, event::EventRepository},
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::notify::{self, Mailer};

/// List active events
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>> {
    let repo = EventRepository::new(pool);
    repo.list_active().await
}

/// Get an event by id
pub async fn get_event(pool: &PgPool, id: Uuid) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new event and announce it to classes of its category
pub async fn create_event(
    pool: &PgPool,
    mailer: &dyn Mailer,
    request: &CreateEventRequest,
) -> Result<Event> {
    let repo = EventRepository::new(pool);
    let event = repo.create(request).await?;

    announce(pool, mailer, &event).await;

    Ok(event)
}

/// Update an event and re-announce the changed details. Capacity bounds are
/// checked against the merged state, so a partial update cannot push
/// min_students past the stored max_students.
pub async fn update_event(
    pool: &PgPool,
    mailer: &dyn Mailer,
    id: Uuid,
    request: &UpdateEventRequest,
) -> WebResult<Event> {
    let repo = EventRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    request
        .validate_bounds(existing.min_students, existing.max_students)
        .map_err(WebError::BadRequest)?;

    let event = repo.update(id, request).await?;

    announce(pool, mailer, &event).await;

    Ok(event)
}

/// Delete an event
pub async fn delete_event(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = EventRepository::new(pool);
    repo.delete(id).await
}

/// Best-effort announcement; the event is already committed, so a lookup or
/// dispatch failure only gets logged.
async fn announce(pool: &PgPool, mailer: &dyn Mailer, event: &Event) {
    let Ok(category) = Category::parse(&event.category) else {
        return;
    };

    match ClassRepository::new(pool).find_by_category(category).await {
        Ok(classes) => {
            notify::notify_classes(mailer, &classes, |class, recipient| {
                notify::event_announcement(event, class, recipient)
            });
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not load classes for event announcement");
        }
    }
}
