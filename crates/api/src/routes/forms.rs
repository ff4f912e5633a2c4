//! Route definitions for scholarship forms, registered under `/forms`.
//!
//! Submission intake and listing are nested here because they are
//! addressed through their form; submission detail/status live in
//! `routes::submissions`.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{forms, submissions};
use crate::state::AppState;

/// Submission bodies can carry several file answers of up to 2 MiB
/// each, so the default axum body limit is too small for this route.
const SUBMISSION_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// ```text
/// GET    /                               list
/// POST   /                               create
/// GET    /{id}                           get_detail
/// PUT    /{id}                           update
/// DELETE /{id}                           delete
/// PUT    /{id}/toggle-active        toggle_active
/// GET    /{id}/submissions          list_by_form
/// POST   /{id}/submissions          submit (multipart)
/// GET    /{id}/submissions/export   export
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(forms::list).post(forms::create))
        .route(
            "/{id}",
            get(forms::get_detail).put(forms::update).delete(forms::delete),
        )
        .route("/{id}/toggle-active", put(forms::toggle_active))
        .route(
            "/{id}/submissions",
            get(submissions::list_by_form)
                .post(submissions::submit)
                .layer(DefaultBodyLimit::max(SUBMISSION_BODY_LIMIT)),
        )
        .route("/{id}/submissions/export", get(submissions::export))
}
