//! Repository for the `mpm_profiles` table.

use sqlx::PgPool;

use crate::models::mpm_profile::{CreateMpmProfile, MpmProfile, UpdateMpmProfile};

/// Column list for mpm_profiles queries.
const COLUMNS: &str =
    "id, name, slug, vision, mission, description, structure, created_at, updated_at";

/// Provides CRUD operations for MPM organization profiles.
pub struct MpmProfileRepo;

impl MpmProfileRepo {
    /// Create a new profile.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMpmProfile,
        slug: &str,
        structure: &serde_json::Value,
    ) -> Result<MpmProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO mpm_profiles (name, slug, vision, mission, description, structure)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MpmProfile>(&query)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.vision)
            .bind(&input.mission)
            .bind(&input.description)
            .bind(structure)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<MpmProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mpm_profiles WHERE slug = $1");
        sqlx::query_as::<_, MpmProfile>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all profiles ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<MpmProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mpm_profiles ORDER BY name ASC");
        sqlx::query_as::<_, MpmProfile>(&query).fetch_all(pool).await
    }

    /// Update a profile by slug. `structure` replaces the whole document
    /// when present.
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        input: &UpdateMpmProfile,
        structure: Option<&serde_json::Value>,
    ) -> Result<MpmProfile, sqlx::Error> {
        let query = format!(
            "UPDATE mpm_profiles SET
                name = COALESCE($1, name),
                vision = COALESCE($2, vision),
                mission = COALESCE($3, mission),
                description = COALESCE($4, description),
                structure = COALESCE($5, structure),
                updated_at = now()
             WHERE slug = $6
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MpmProfile>(&query)
            .bind(&input.name)
            .bind(&input.vision)
            .bind(&input.mission)
            .bind(&input.description)
            .bind(structure)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Delete a profile by slug.
    pub async fn delete(pool: &PgPool, slug: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM mpm_profiles WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(())
    }
}
