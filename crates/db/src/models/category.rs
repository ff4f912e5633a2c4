//! News category models.

use serde::{Deserialize, Serialize};
use simawa_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    /// Auto-generated from name if `None`.
    pub slug: Option<String>,
}

/// DTO for updating an existing category.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
}
