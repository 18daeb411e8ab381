use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database, dto::standings::StandingsFilter, services::standings::StandingsEntry,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/standings",
    params(StandingsFilter),
    responses(
        (status = 200, description = "Standings computed successfully", body = Vec<StandingsEntry>),
        (status = 400, description = "Unknown category")
    ),
    tag = "standings"
)]
pub async fn get_standings(
    State(db): State<Database>,
    Query(filter): Query<StandingsFilter>,
) -> Result<Response, WebError> {
    let standings = services::get_standings(db.pool(), &filter).await?;

    Ok(Json(standings).into_response())
}
