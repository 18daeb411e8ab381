use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{declare_result, delete_result, get_result, update_result};
use crate::middleware::auth::{RoleKeys, require_auth};

pub fn routes(role_keys: RoleKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(declare_result))
        .route("/:id", put(update_result))
        .route("/:id", delete(delete_result))
        .route_layer(middleware::from_fn_with_state(role_keys, require_auth));

    Router::new()
        .route("/:event_id/:year", get(get_result))
        .merge(protected)
}
