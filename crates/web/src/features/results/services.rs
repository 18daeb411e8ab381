use std::collections::HashSet;

use sqlx::PgPool;
use storage::{
    dto::result::{DeclareResultRequest, UpdateResultRequest},
    models::{Event, EventResult, SoloPlacing},
    repository::{class::ClassRepository, event::EventRepository, result::ResultRepository},
    services::outcome::{self, ProposedPlacing},
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::notify::{self, Mailer};

/// Get the declared result for an event and year
pub async fn get_result(
    pool: &PgPool,
    event_id: Uuid,
    year: i32,
) -> WebResult<(EventResult, Vec<SoloPlacing>)> {
    let repo = ResultRepository::new(pool);
    let result = repo.find_by_event_and_year(event_id, year).await?;
    let placings = repo.solo_placings(result.result_id).await?;

    Ok((result, placings))
}

/// Declare the result for an event and year. Only active events with a
/// points table accept declarations; anything else would never reach the
/// standings. The (event, year) pair moves from Undeclared to Declared
/// exactly once; the unique index turns a second declaration into a conflict
/// without touching the existing result. Classes of the event's category are
/// notified after the declaration commits.
pub async fn declare_result(
    pool: &PgPool,
    mailer: &dyn Mailer,
    request: &DeclareResultRequest,
) -> WebResult<(EventResult, Vec<SoloPlacing>)> {
    let event = EventRepository::new(pool).find_by_id(request.event_id).await?;
    ensure_scorable(&event)?;

    let proposed: Vec<ProposedPlacing> = request
        .solo_placings
        .iter()
        .map(|p| ProposedPlacing {
            class_id: p.class_id,
            student: p.student.clone(),
            position: p.position,
        })
        .collect();
    let (placings, solo) = validate_outcome_shape(&event, &request.placings, &proposed)?;
    check_classes(pool, &event, &placings, &solo).await?;

    let repo = ResultRepository::new(pool);
    let result = repo
        .create(request.event_id, request.year, &placings, &solo)
        .await?;
    let stored_placings = repo.solo_placings(result.result_id).await?;

    announce(pool, mailer, &event, request.year).await;

    Ok((result, stored_placings))
}

/// Replace the outcome of a declared result. Event and year stay fixed.
pub async fn update_result(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateResultRequest,
) -> WebResult<(EventResult, Vec<SoloPlacing>)> {
    let repo = ResultRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    let event = EventRepository::new(pool).find_by_id(existing.event_id).await?;

    let proposed: Vec<ProposedPlacing> = request
        .solo_placings
        .iter()
        .map(|p| ProposedPlacing {
            class_id: p.class_id,
            student: p.student.clone(),
            position: p.position,
        })
        .collect();
    let (placings, solo) =
        validate_outcome_shape(&event, &request.placings, &proposed)?;
    check_classes(pool, &event, &placings, &solo).await?;

    let result = repo.replace_outcome(id, &placings, &solo).await?;
    let stored_placings = repo.solo_placings(result.result_id).await?;

    Ok((result, stored_placings))
}

/// Remove a declaration, returning the (event, year) pair to Undeclared
pub async fn delete_result(pool: &PgPool, id: Uuid) -> WebResult<()> {
    let repo = ResultRepository::new(pool);
    repo.delete(id).await?;

    Ok(())
}

/// A result may only be declared for an event that is active and carries a
/// points table; the standings skip everything else.
fn ensure_scorable(event: &Event) -> WebResult<()> {
    if !event.is_active {
        return Err(WebError::BadRequest(
            "Results can only be declared for active events".to_string(),
        ));
    }
    if !event.is_scored() {
        return Err(WebError::BadRequest(
            "Results can only be declared for events with a points table".to_string(),
        ));
    }

    Ok(())
}

/// A result carries exactly one outcome shape: a group ranking or a set of
/// solo placings.
fn validate_outcome_shape(
    event: &Event,
    placings: &[Uuid],
    solo_placings: &[ProposedPlacing],
) -> WebResult<(Vec<Uuid>, Vec<ProposedPlacing>)> {
    match (placings.is_empty(), solo_placings.is_empty()) {
        (false, false) => Err(WebError::BadRequest(
            "A result must carry either a ranking or solo placings, not both".to_string(),
        )),
        (true, true) => Err(WebError::BadRequest(
            "A result must rank classes or place students".to_string(),
        )),
        (false, true) => {
            outcome::validate_ranking(placings)?;
            Ok((placings.to_vec(), vec![]))
        }
        (true, false) => {
            if event.participation != "Solo" {
                return Err(WebError::BadRequest(
                    "Solo placings are only valid for Solo events".to_string(),
                ));
            }
            let normalized = outcome::validate_solo_placings(solo_placings)?;
            Ok((vec![], normalized))
        }
    }
}

/// Every referenced class must exist and belong to the event's category.
async fn check_classes(
    pool: &PgPool,
    event: &Event,
    placings: &[Uuid],
    solo_placings: &[ProposedPlacing],
) -> WebResult<()> {
    let referenced: HashSet<Uuid> = placings
        .iter()
        .copied()
        .chain(solo_placings.iter().map(|p| p.class_id))
        .collect();
    let ids: Vec<Uuid> = referenced.iter().copied().collect();

    let classes = ClassRepository::new(pool).find_by_ids(&ids).await?;
    if classes.len() != ids.len() {
        return Err(WebError::NotFound);
    }

    for class in &classes {
        if class.category != event.category {
            return Err(WebError::BadRequest(format!(
                "Class '{}' is not in the {} category",
                class.name, event.category
            )));
        }
    }

    Ok(())
}

/// Best-effort; the declaration has already committed and is never rolled
/// back over a failed notification.
async fn announce(pool: &PgPool, mailer: &dyn Mailer, event: &Event, year: i32) {
    let Ok(category) = storage::models::Category::parse(&event.category) else {
        return;
    };

    match ClassRepository::new(pool).find_by_category(category).await {
        Ok(classes) => {
            notify::notify_classes(mailer, &classes, |class, recipient| {
                notify::result_announcement(event, year, class, recipient)
            });
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not load classes for result announcement");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(is_active: bool, points: Vec<i32>) -> Event {
        Event {
            event_id: Uuid::new_v4(),
            name: "Quiz".to_string(),
            category: "Senior".to_string(),
            participation: "Group".to_string(),
            description: "General knowledge quiz".to_string(),
            rules: vec!["Teams of two".to_string()],
            min_students: 1,
            max_students: 5,
            location: "Main hall".to_string(),
            points,
            is_active,
            created_at: Default::default(),
        }
    }

    #[test]
    fn test_scorable_event_accepts_declaration() {
        assert!(ensure_scorable(&event(true, vec![10, 6, 3])).is_ok());
    }

    #[test]
    fn test_inactive_event_rejects_declaration() {
        let err = ensure_scorable(&event(false, vec![10, 6, 3]));
        assert!(matches!(err, Err(WebError::BadRequest(_))));
    }

    #[test]
    fn test_unscored_event_rejects_declaration() {
        let err = ensure_scorable(&event(true, vec![]));
        assert!(matches!(err, Err(WebError::BadRequest(_))));
    }
}
