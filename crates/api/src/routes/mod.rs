pub mod categories;
pub mod forms;
pub mod health;
pub mod news;
pub mod profiles;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                              list, create
/// /categories/{id}                         update, delete
///
/// /news                                    list, create
/// /news/{slug}                             get, update, delete
/// /news/{slug}/toggle-publish              toggle publish status (PUT)
///
/// /forms                                   list, create
/// /forms/{id}                              get detail, update, delete
/// /forms/{id}/toggle-active                toggle active status (PUT)
/// /forms/{id}/submissions                  list, submit (POST, multipart)
/// /forms/{id}/submissions/export           export CSV/JSON (GET)
///
/// /submissions/{id}                        get
/// /submissions/{id}/status                 update review status (PUT)
///
/// /profiles                                list, create
/// /profiles/{slug}                         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/news", news::router())
        .nest("/forms", forms::router())
        .merge(submissions::router())
        .nest("/profiles", profiles::router())
}
