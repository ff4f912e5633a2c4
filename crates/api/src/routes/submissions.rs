//! Route definitions for submissions addressed by their own id,
//! registered under `/submissions`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// ```text
/// GET /submissions/{id}         get_by_id
/// PUT /submissions/{id}/status  update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submissions/{id}", get(submissions::get_by_id))
        .route("/submissions/{id}/status", put(submissions::update_status))
}
