//! News article models.

use serde::{Deserialize, Serialize};
use simawa_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `news_articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsArticle {
    pub id: DbId,
    pub category_id: Option<DbId>,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new news article.
#[derive(Debug, Deserialize)]
pub struct CreateNewsArticle {
    pub category_id: Option<DbId>,
    pub title: String,
    /// Auto-generated from title if `None`.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub is_published: Option<bool>,
}

/// DTO for updating an existing news article.
#[derive(Debug, Deserialize)]
pub struct UpdateNewsArticle {
    pub category_id: Option<DbId>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
}
