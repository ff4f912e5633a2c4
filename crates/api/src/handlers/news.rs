//! Handlers for news articles.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use simawa_core::error::CoreError;
use simawa_core::news::{validate_content, validate_title};
use simawa_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use simawa_core::slug::{generate_slug, validate_slug};
use simawa_core::types::DbId;
use simawa_db::models::news::{CreateNewsArticle, NewsArticle, UpdateNewsArticle};
use simawa_db::repositories::NewsRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, serde::Deserialize)]
pub struct ListNewsParams {
    pub category_id: Option<DbId>,
    pub is_published: Option<bool>,
    /// Substring search over title and content.
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Fetch an article by slug or return 404.
async fn ensure_article_by_slug(pool: &sqlx::PgPool, slug: &str) -> AppResult<NewsArticle> {
    NewsRepo::find_by_slug(pool, slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("NewsArticle", slug)))
}

/// GET /news
///
/// List news articles with optional category/published/search filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListNewsParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);

    let articles = NewsRepo::list(
        &state.pool,
        params.category_id,
        params.is_published,
        params.q.as_deref().filter(|q| !q.trim().is_empty()),
        limit,
        offset,
    )
    .await?;

    Ok(Json(DataResponse { data: articles }))
}

/// POST /news
///
/// Create a news article. Generates slug from title if not provided.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNewsArticle>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::Core)?;
    validate_content(&input.content).map_err(AppError::Core)?;

    let slug = match &input.slug {
        Some(s) => {
            validate_slug(s).map_err(AppError::Core)?;
            s.clone()
        }
        None => generate_slug(&input.title),
    };

    let article = NewsRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(article_id = article.id, slug = %article.slug, "News article created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: article })))
}

/// GET /news/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let article = ensure_article_by_slug(&state.pool, &slug).await?;
    Ok(Json(DataResponse { data: article }))
}

/// PUT /news/{slug}
pub async fn update(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateNewsArticle>,
) -> AppResult<impl IntoResponse> {
    ensure_article_by_slug(&state.pool, &slug).await?;

    if let Some(ref title) = input.title {
        validate_title(title).map_err(AppError::Core)?;
    }
    if let Some(ref content) = input.content {
        validate_content(content).map_err(AppError::Core)?;
    }

    let article = NewsRepo::update(&state.pool, &slug, &input).await?;

    tracing::info!(article_id = article.id, slug = %slug, "News article updated");

    Ok(Json(DataResponse { data: article }))
}

/// PUT /news/{slug}/toggle-publish
///
/// Flip the publish flag; the first publish stamps `published_at`.
pub async fn toggle_publish(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    ensure_article_by_slug(&state.pool, &slug).await?;

    let article = NewsRepo::toggle_published(&state.pool, &slug).await?;

    tracing::info!(
        article_id = article.id,
        is_published = article.is_published,
        "News article publish status toggled"
    );

    Ok(Json(DataResponse { data: article }))
}

/// DELETE /news/{slug}
pub async fn delete(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let article = ensure_article_by_slug(&state.pool, &slug).await?;

    NewsRepo::delete(&state.pool, &slug).await?;

    tracing::info!(article_id = article.id, slug = %slug, "News article deleted");

    Ok(StatusCode::NO_CONTENT)
}
