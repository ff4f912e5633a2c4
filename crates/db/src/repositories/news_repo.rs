//! Repository for the `news_articles` table.

use sqlx::PgPool;
use simawa_core::types::DbId;

use crate::models::news::{CreateNewsArticle, NewsArticle, UpdateNewsArticle};

/// Column list for news_articles queries.
const COLUMNS: &str = "id, category_id, title, slug, excerpt, content, \
    is_published, published_at, created_at, updated_at";

/// Provides CRUD operations for news articles.
pub struct NewsRepo;

impl NewsRepo {
    /// Create a new news article.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNewsArticle,
        slug: &str,
    ) -> Result<NewsArticle, sqlx::Error> {
        let is_published = input.is_published.unwrap_or(false);
        let query = format!(
            "INSERT INTO news_articles
                (category_id, title, slug, excerpt, content, is_published, published_at)
             VALUES ($1, $2, $3, $4, $5, $6,
                     CASE WHEN $6 THEN now() ELSE NULL END)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(is_published)
            .fetch_one(pool)
            .await
    }

    /// Find a news article by slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<NewsArticle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news_articles WHERE slug = $1");
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List news articles with optional category, published, and
    /// substring-search filters.
    pub async fn list(
        pool: &PgPool,
        category_id: Option<DbId>,
        is_published: Option<bool>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NewsArticle>, sqlx::Error> {
        let pattern = search.map(|q| format!("%{q}%"));
        let query = format!(
            "SELECT {COLUMNS} FROM news_articles
             WHERE ($1::BIGINT IS NULL OR category_id = $1)
               AND ($2::BOOL IS NULL OR is_published = $2)
               AND ($3::TEXT IS NULL OR title ILIKE $3 OR content ILIKE $3)
             ORDER BY created_at DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(category_id)
            .bind(is_published)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a news article by slug.
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        input: &UpdateNewsArticle,
    ) -> Result<NewsArticle, sqlx::Error> {
        let query = format!(
            "UPDATE news_articles SET
                category_id = COALESCE($1, category_id),
                title = COALESCE($2, title),
                excerpt = COALESCE($3, excerpt),
                content = COALESCE($4, content),
                updated_at = now()
             WHERE slug = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Flip the publish flag. First publish stamps `published_at`; later
    /// toggles leave the original publication time intact.
    pub async fn toggle_published(
        pool: &PgPool,
        slug: &str,
    ) -> Result<NewsArticle, sqlx::Error> {
        let query = format!(
            "UPDATE news_articles SET
                is_published = NOT is_published,
                published_at = CASE
                    WHEN NOT is_published AND published_at IS NULL THEN now()
                    ELSE published_at
                END,
                updated_at = now()
             WHERE slug = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Delete a news article by slug.
    pub async fn delete(pool: &PgPool, slug: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM news_articles WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(())
    }
}
