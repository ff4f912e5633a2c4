//! Repository for the `categories` table.

use sqlx::PgPool;
use simawa_core::types::DbId;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list for categories queries.
const COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Provides CRUD operations for news categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Create a new category.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCategory,
        slug: &str,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, slug)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Update a category.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($1, name),
                slug = COALESCE($2, slug),
                updated_at = now()
             WHERE id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a category. Articles keep existing; their category_id is
    /// detached by the ON DELETE SET NULL foreign key.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
