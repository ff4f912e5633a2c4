//! Route definitions for news categories, registered under `/categories`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// ```text
/// GET    /        list
/// POST   /        create
/// PUT    /{id}    update
/// DELETE /{id}    delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list).post(categories::create))
        .route(
            "/{id}",
            put(categories::update).delete(categories::delete),
        )
}
