//! Route definitions for MPM profiles, registered under `/profiles`.

use axum::routing::get;
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// ```text
/// GET    /        list
/// POST   /        create
/// GET    /{slug}  get_by_slug
/// PUT    /{slug}  update
/// DELETE /{slug}  delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profiles::list).post(profiles::create))
        .route(
            "/{slug}",
            get(profiles::get_by_slug)
                .put(profiles::update)
                .delete(profiles::delete),
        )
}
