//! MPM organization profile models.

use serde::{Deserialize, Serialize};
use simawa_core::profile::OrgStructure;
use simawa_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `mpm_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MpmProfile {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub vision: String,
    pub mission: Vec<String>,
    pub description: Option<String>,
    pub structure: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new profile.
#[derive(Debug, Deserialize)]
pub struct CreateMpmProfile {
    pub name: String,
    /// Auto-generated from name if `None`.
    pub slug: Option<String>,
    pub vision: String,
    pub mission: Vec<String>,
    pub description: Option<String>,
    pub structure: OrgStructure,
}

/// DTO for updating an existing profile.
#[derive(Debug, Deserialize)]
pub struct UpdateMpmProfile {
    pub name: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<Vec<String>>,
    pub description: Option<String>,
    pub structure: Option<OrgStructure>,
}
