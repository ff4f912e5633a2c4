//! Handlers for scholarship forms and their nested definitions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use simawa_core::error::CoreError;
use simawa_core::form::{validate_definition, validate_form_title, validate_window};
use simawa_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use simawa_core::types::DbId;
use simawa_db::models::scholarship_form::{
    CreateScholarshipForm, ScholarshipForm, ScholarshipFormDetail, UpdateScholarshipForm,
};
use simawa_db::repositories::ScholarshipFormRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, serde::Deserialize)]
pub struct ListFormsParams {
    pub is_active: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Fetch a form by id or return 404.
pub(crate) async fn ensure_form(pool: &sqlx::PgPool, id: DbId) -> AppResult<ScholarshipForm> {
    ScholarshipFormRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("ScholarshipForm", id)))
}

/// GET /forms
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListFormsParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);

    let forms = ScholarshipFormRepo::list(&state.pool, params.is_active, limit, offset).await?;
    Ok(Json(DataResponse { data: forms }))
}

/// POST /forms
///
/// Create a form with its full nested definition in one transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateScholarshipForm>,
) -> AppResult<impl IntoResponse> {
    validate_form_title(&input.title).map_err(AppError::Core)?;
    validate_window(input.starts_on, input.deadline).map_err(AppError::Core)?;
    validate_definition(&input.sections).map_err(AppError::Core)?;

    let slug = match &input.slug {
        Some(s) => {
            simawa_core::slug::validate_slug(s).map_err(AppError::Core)?;
            s.clone()
        }
        None => simawa_core::slug::generate_slug(&input.title),
    };

    let form = ScholarshipFormRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(
        form_id = form.id,
        slug = %form.slug,
        sections = input.sections.len(),
        "Scholarship form created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: form })))
}

/// GET /forms/{id}
///
/// Return the form with its ordered sections and fields.
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let form = ensure_form(&state.pool, id).await?;
    let sections = ScholarshipFormRepo::load_definition(&state.pool, form.id).await?;

    Ok(Json(DataResponse {
        data: ScholarshipFormDetail { form, sections },
    }))
}

/// PUT /forms/{id}
///
/// Update metadata; when `sections` is present, the whole definition is
/// validated and replaced.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateScholarshipForm>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_form(&state.pool, id).await?;

    if let Some(ref title) = input.title {
        validate_form_title(title).map_err(AppError::Core)?;
    }
    // The window check covers partial updates against the stored dates.
    let starts_on = input.starts_on.unwrap_or(existing.starts_on);
    let deadline = input.deadline.unwrap_or(existing.deadline);
    validate_window(starts_on, deadline).map_err(AppError::Core)?;

    if let Some(ref sections) = input.sections {
        validate_definition(sections).map_err(AppError::Core)?;
    }

    let form = ScholarshipFormRepo::update(&state.pool, id, &input).await?;

    tracing::info!(
        form_id = id,
        definition_replaced = input.sections.is_some(),
        "Scholarship form updated"
    );

    Ok(Json(DataResponse { data: form }))
}

/// PUT /forms/{id}/toggle-active
pub async fn toggle_active(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_form(&state.pool, id).await?;

    let form = ScholarshipFormRepo::toggle_active(&state.pool, id).await?;

    tracing::info!(form_id = id, is_active = form.is_active, "Form active status toggled");

    Ok(Json(DataResponse { data: form }))
}

/// DELETE /forms/{id}
///
/// Sections, fields, and submissions cascade.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_form(&state.pool, id).await?;

    ScholarshipFormRepo::delete(&state.pool, id).await?;

    tracing::info!(form_id = id, "Scholarship form deleted");

    Ok(StatusCode::NO_CONTENT)
}
