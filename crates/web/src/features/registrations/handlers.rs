use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::registration::{
        CreateRegistrationRequest, RegistrationResponse, UpdateRegistrationRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::{Actor, Role, require_role};

use super::services;

#[utoipa::path(
    get,
    path = "/api/registrations",
    responses(
        (status = 200, description = "List all registrations successfully", body = Vec<RegistrationResponse>)
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(db): State<Database>,
) -> Result<Json<Vec<RegistrationResponse>>, WebError> {
    let registrations = services::list_registrations(db.pool()).await?;

    let response: Vec<RegistrationResponse> = registrations
        .into_iter()
        .map(RegistrationResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/registrations/{id}",
    params(
        ("id" = Uuid, Path, description = "Registration id")
    ),
    responses(
        (status = 200, description = "Registration found", body = RegistrationResponse),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn get_registration(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let registration = services::get_registration(db.pool(), id).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations",
    request_body = CreateRegistrationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Registration created successfully", body = RegistrationResponse),
        (status = 400, description = "Roster fails the event's capacity rules"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Actor lacks the Class role"),
        (status = 404, description = "Class or event not found"),
        (status = 409, description = "Class already registered for this event and year")
    ),
    tag = "registrations"
)]
pub async fn create_registration(
    State(db): State<Database>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<Response, WebError> {
    require_role(actor, &[Role::Class])?;
    req.validate()?;

    let registration = services::create_registration(db.pool(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::from(registration)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/registrations/{id}",
    params(
        ("id" = Uuid, Path, description = "Registration id")
    ),
    request_body = UpdateRegistrationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Registration updated successfully", body = RegistrationResponse),
        (status = 400, description = "Roster fails the event's capacity rules"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Actor lacks the Class role"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn update_registration(
    State(db): State<Database>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRegistrationRequest>,
) -> Result<Response, WebError> {
    require_role(actor, &[Role::Class])?;
    req.validate()?;

    let registration = services::update_registration(db.pool(), id, &req).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/registrations/{id}",
    params(
        ("id" = Uuid, Path, description = "Registration id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Registration deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Actor lacks the required role"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn delete_registration(
    State(db): State<Database>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    require_role(actor, &[Role::Class, Role::Admin])?;

    services::delete_registration(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
