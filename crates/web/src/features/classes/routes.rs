use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_class, delete_class, get_class, list_classes, update_class};
use crate::middleware::auth::{RoleKeys, require_auth};

pub fn routes(role_keys: RoleKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_class))
        .route("/:id", put(update_class))
        .route("/:id", delete(delete_class))
        .route_layer(middleware::from_fn_with_state(role_keys, require_auth));

    Router::new()
        .route("/", get(list_classes))
        .route("/:id", get(get_class))
        .merge(protected)
}
