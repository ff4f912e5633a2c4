//! Route definitions for news articles, registered under `/news`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// ```text
/// GET    /                       list
/// POST   /                       create
/// GET    /{slug}                 get_by_slug
/// PUT    /{slug}                 update
/// DELETE /{slug}                 delete
/// PUT    /{slug}/toggle-publish  toggle_publish
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list).post(news::create))
        .route(
            "/{slug}",
            get(news::get_by_slug).put(news::update).delete(news::delete),
        )
        .route("/{slug}/toggle-publish", put(news::toggle_publish))
}
