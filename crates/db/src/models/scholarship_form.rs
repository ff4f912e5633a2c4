//! Scholarship form, section, and field models.
//!
//! Create/update payloads carry the nested definition using the draft
//! types from `simawa_core::form`, so the same structures the validator
//! checks are the ones the repository persists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use simawa_core::form::SectionDraft;
use simawa_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `scholarship_forms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScholarshipForm {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub starts_on: NaiveDate,
    pub deadline: NaiveDate,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `form_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FormSection {
    pub id: DbId,
    pub form_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub sort_order: i32,
}

/// A row from the `form_fields` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FormField {
    pub id: DbId,
    pub section_id: DbId,
    pub label: String,
    pub field_type: String,
    pub options: Option<String>,
    pub is_required: bool,
    pub sort_order: i32,
}

/// DTO for creating a new scholarship form with its full definition.
#[derive(Debug, Deserialize)]
pub struct CreateScholarshipForm {
    pub title: String,
    /// Auto-generated from title if `None`.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub starts_on: NaiveDate,
    pub deadline: NaiveDate,
    pub is_active: Option<bool>,
    pub sections: Vec<SectionDraft>,
}

/// DTO for updating a scholarship form.
///
/// When `sections` is present the whole definition is replaced; existing
/// sections and fields are deleted and reinserted in one transaction.
#[derive(Debug, Deserialize)]
pub struct UpdateScholarshipForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub sections: Option<Vec<SectionDraft>>,
}

/// A section together with its ordered fields, for detail responses.
#[derive(Debug, Serialize)]
pub struct SectionWithFields {
    #[serde(flatten)]
    pub section: FormSection,
    pub fields: Vec<FormField>,
}

/// A form together with its full ordered definition.
#[derive(Debug, Serialize)]
pub struct ScholarshipFormDetail {
    #[serde(flatten)]
    pub form: ScholarshipForm,
    pub sections: Vec<SectionWithFields>,
}
