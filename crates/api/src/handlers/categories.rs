//! Handlers for news categories.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use simawa_core::error::CoreError;
use simawa_core::news::validate_category_name;
use simawa_core::slug::{generate_slug, validate_slug};
use simawa_core::types::DbId;
use simawa_db::models::category::{CreateCategory, UpdateCategory};
use simawa_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    validate_category_name(&input.name).map_err(AppError::Core)?;

    let slug = match &input.slug {
        Some(s) => {
            validate_slug(s).map_err(AppError::Core)?;
            s.clone()
        }
        None => generate_slug(&input.name),
    };

    let category = CategoryRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(category_id = category.id, slug = %category.slug, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.name {
        validate_category_name(name).map_err(AppError::Core)?;
    }
    if let Some(ref slug) = input.slug {
        validate_slug(slug).map_err(AppError::Core)?;
    }

    let category = CategoryRepo::update(&state.pool, id, &input).await?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /categories/{id}
///
/// Articles in the category are detached, not deleted.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Category", id)))?;

    CategoryRepo::delete(&state.pool, id).await?;

    tracing::info!(category_id = id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
