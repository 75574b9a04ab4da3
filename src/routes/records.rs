//! Record CRUD routes under `/users`. The trailing-slash and bare forms route identically.

use crate::handlers::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn record_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list).post(create))
        .route("/users/", get(list).post(create))
        .route(
            "/users/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
