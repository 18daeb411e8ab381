use sqlx::PgPool;
use storage::{
    dto::standings::StandingsFilter,
    models::Category,
    repository::{class::ClassRepository, event::EventRepository, result::ResultRepository},
    services::standings::{self, DeclaredResult, StandingsEntry},
};
use uuid::Uuid;

use crate::error::WebResult;

/// Compute the leaderboard for one category and year.
///
/// Reads immutable snapshots (classes of the category, its scored active
/// events, the year's declared results for those events) and hands them to
/// the pure aggregator. Nothing is persisted.
pub async fn get_standings(
    pool: &PgPool,
    filter: &StandingsFilter,
) -> WebResult<Vec<StandingsEntry>> {
    let category = Category::parse(&filter.category)?;

    let classes = ClassRepository::new(pool).find_by_category(category).await?;
    let events = EventRepository::new(pool)
        .find_active_by_category(category)
        .await?;

    let scored_ids: Vec<Uuid> = events
        .iter()
        .filter(|event| event.is_scored())
        .map(|event| event.event_id)
        .collect();

    let results: Vec<DeclaredResult> = if scored_ids.is_empty() {
        vec![]
    } else {
        ResultRepository::new(pool)
            .find_declared_for_events(filter.year, &scored_ids)
            .await?
            .into_iter()
            .map(|(result, solo_placings)| DeclaredResult {
                result,
                solo_placings,
            })
            .collect()
    };

    Ok(standings::aggregate(&classes, &events, &results))
}
