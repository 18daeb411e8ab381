use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::result::{DeclareResultRequest, ResultResponse, UpdateResultRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::{Actor, Role, require_role};
use crate::notify::SharedMailer;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results/{event_id}/{year}",
    params(
        ("event_id" = Uuid, Path, description = "Event id"),
        ("year" = i32, Path, description = "Season year")
    ),
    responses(
        (status = 200, description = "Result found", body = ResultResponse),
        (status = 404, description = "No result declared for this event and year")
    ),
    tag = "results"
)]
pub async fn get_result(
    State(db): State<Database>,
    Path((event_id, year)): Path<(Uuid, i32)>,
) -> Result<Response, WebError> {
    let (result, placings) = services::get_result(db.pool(), event_id, year).await?;

    Ok(Json(ResultResponse::from_parts(result, placings)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = DeclareResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Result declared successfully", body = ResultResponse),
        (status = 400, description = "Malformed outcome"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Actor lacks the Convenor role"),
        (status = 404, description = "Event or referenced class not found"),
        (status = 409, description = "Result already declared for this event and year")
    ),
    tag = "results"
)]
pub async fn declare_result(
    State(db): State<Database>,
    Extension(actor): Extension<Actor>,
    Extension(mailer): Extension<SharedMailer>,
    Json(req): Json<DeclareResultRequest>,
) -> Result<Response, WebError> {
    require_role(actor, &[Role::Convenor])?;
    req.validate()?;

    let (result, placings) = services::declare_result(db.pool(), mailer.as_ref(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResultResponse::from_parts(result, placings)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/results/{id}",
    params(
        ("id" = Uuid, Path, description = "Result id")
    ),
    request_body = UpdateResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result updated successfully", body = ResultResponse),
        (status = 400, description = "Malformed outcome"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Actor lacks the Convenor role"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn update_result(
    State(db): State<Database>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateResultRequest>,
) -> Result<Response, WebError> {
    require_role(actor, &[Role::Convenor])?;
    req.validate()?;

    let (result, placings) = services::update_result(db.pool(), id, &req).await?;

    Ok(Json(ResultResponse::from_parts(result, placings)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(
        ("id" = Uuid, Path, description = "Result id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Result deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Actor lacks the Convenor role"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn delete_result(
    State(db): State<Database>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    require_role(actor, &[Role::Convenor])?;

    services::delete_result(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
