use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_registration, delete_registration, get_registration, list_registrations,
    update_registration,
};
use crate::middleware::auth::{RoleKeys, require_auth};

pub fn routes(role_keys: RoleKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_registration))
        .route("/:id", put(update_registration))
        .route("/:id", delete(delete_registration))
        .route_layer(middleware::from_fn_with_state(role_keys, require_auth));

    Router::new()
        .route("/", get(list_registrations))
        .route("/:id", get(get_registration))
        .merge(protected)
}
