//! Handlers for MPM organization profiles.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use simawa_core::error::CoreError;
use simawa_core::profile::{validate_profile, validate_structure, OrgStructure};
use simawa_core::slug::{generate_slug, validate_slug};
use simawa_db::models::mpm_profile::{CreateMpmProfile, MpmProfile, UpdateMpmProfile};
use simawa_db::repositories::MpmProfileRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a profile by slug or return 404.
async fn ensure_profile_by_slug(pool: &sqlx::PgPool, slug: &str) -> AppResult<MpmProfile> {
    MpmProfileRepo::find_by_slug(pool, slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("MpmProfile", slug)))
}

fn structure_json(structure: &OrgStructure) -> AppResult<serde_json::Value> {
    serde_json::to_value(structure).map_err(|e| AppError::InternalError(e.to_string()))
}

/// GET /profiles
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profiles = MpmProfileRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: profiles }))
}

/// POST /profiles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMpmProfile>,
) -> AppResult<impl IntoResponse> {
    validate_profile(&input.name, &input.vision, &input.mission).map_err(AppError::Core)?;
    validate_structure(&input.structure).map_err(AppError::Core)?;

    let slug = match &input.slug {
        Some(s) => {
            validate_slug(s).map_err(AppError::Core)?;
            s.clone()
        }
        None => generate_slug(&input.name),
    };

    let structure = structure_json(&input.structure)?;
    let profile = MpmProfileRepo::create(&state.pool, &input, &slug, &structure).await?;

    tracing::info!(profile_id = profile.id, slug = %profile.slug, "MPM profile created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: profile })))
}

/// GET /profiles/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = ensure_profile_by_slug(&state.pool, &slug).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /profiles/{slug}
pub async fn update(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateMpmProfile>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_profile_by_slug(&state.pool, &slug).await?;

    // Validate the post-update profile, falling back to stored values
    // for fields the patch leaves untouched.
    let name = input.name.as_deref().unwrap_or(&existing.name);
    let vision = input.vision.as_deref().unwrap_or(&existing.vision);
    let mission = input.mission.as_deref().unwrap_or(&existing.mission);
    validate_profile(name, vision, mission).map_err(AppError::Core)?;

    let structure = match &input.structure {
        Some(s) => {
            validate_structure(s).map_err(AppError::Core)?;
            Some(structure_json(s)?)
        }
        None => None,
    };

    let profile =
        MpmProfileRepo::update(&state.pool, &slug, &input, structure.as_ref()).await?;

    tracing::info!(profile_id = profile.id, slug = %slug, "MPM profile updated");

    Ok(Json(DataResponse { data: profile }))
}

/// DELETE /profiles/{slug}
pub async fn delete(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = ensure_profile_by_slug(&state.pool, &slug).await?;

    MpmProfileRepo::delete(&state.pool, &slug).await?;

    tracing::info!(profile_id = profile.id, slug = %slug, "MPM profile deleted");

    Ok(StatusCode::NO_CONTENT)
}
