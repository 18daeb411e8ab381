use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::class::{ClassResponse, CreateClassRequest, UpdateClassRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::{Actor, Role, require_role};

use super::services;

#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "List all classes successfully", body = Vec<ClassResponse>)
    ),
    tag = "classes"
)]
pub async fn list_classes(
    State(db): State<Database>,
) -> Result<Json<Vec<ClassResponse>>, WebError> {
    let classes = services::list_classes(db.pool()).await?;

    let response: Vec<ClassResponse> = classes.into_iter().map(ClassResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    params(
        ("id" = Uuid, Path, description = "Class id")
    ),
    responses(
        (status = 200, description = "Class found", body = ClassResponse),
        (status = 404, description = "Class not found")
    ),
    tag = "classes"
)]
pub async fn get_class(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let class = services::get_class(db.pool(), id).await?;

    Ok(Json(ClassResponse::from(class)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Class created successfully", body = ClassResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Actor lacks the Admin role"),
        (status = 409, description = "Class name already exists")
    ),
    tag = "classes"
)]
pub async fn create_class(
    State(db): State<Database>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<CreateClassRequest>,
) -> Result<Response, WebError> {
    require_role(actor, &[Role::Admin])?;
    req.validate()?;

    let class = services::create_class(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(ClassResponse::from(class))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/classes/{id}",
    params(
        ("id" = Uuid, Path, description = "Class id")
    ),
    request_body = UpdateClassRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Class updated successfully", body = ClassResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Actor lacks the Admin role"),
        (status = 404, description = "Class not found"),
        (status = 409, description = "Class name already exists")
    ),
    tag = "classes"
)]
pub async fn update_class(
    State(db): State<Database>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateClassRequest>,
) -> Result<Response, WebError> {
    require_role(actor, &[Role::Admin])?;
    req.validate()?;

    let class = services::update_class(db.pool(), id, &req).await?;

    Ok(Json(ClassResponse::from(class)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    params(
        ("id" = Uuid, Path, description = "Class id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Class deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Actor lacks the Admin role"),
        (status = 404, description = "Class not found")
    ),
    tag = "classes"
)]
pub async fn delete_class(
    State(db): State<Database>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    require_role(actor, &[Role::Admin])?;

    services::delete_class(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
