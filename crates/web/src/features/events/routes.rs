use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_event, delete_event, get_event, list_events, update_event};
use crate::middleware::auth::{RoleKeys, require_auth};

pub fn routes(role_keys: RoleKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_event))
        .route("/:id", put(update_event))
        .route("/:id", delete(delete_event))
        .route_layer(middleware::from_fn_with_state(role_keys, require_auth));

    Router::new()
        .route("/", get(list_events))
        .route("/:id", get(get_event))
        .merge(protected)
}
