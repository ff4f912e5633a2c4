//! Repository for scholarship forms and their nested definition
//! (`scholarship_forms`, `form_sections`, `form_fields`).
//!
//! Definition writes are transactional: a form is never visible with a
//! partially inserted section list.

use sqlx::{PgPool, Postgres, Transaction};
use simawa_core::form::SectionDraft;
use simawa_core::types::DbId;

use crate::models::scholarship_form::{
    CreateScholarshipForm, FormField, FormSection, ScholarshipForm, SectionWithFields,
    UpdateScholarshipForm,
};

/// Column list for scholarship_forms queries.
const FORM_COLUMNS: &str =
    "id, title, slug, description, starts_on, deadline, is_active, created_at, updated_at";

/// Column list for form_sections queries.
const SECTION_COLUMNS: &str = "id, form_id, title, description, sort_order";

/// Column list for form_fields queries.
const FIELD_COLUMNS: &str = "id, section_id, label, field_type, options, is_required, sort_order";

/// Provides CRUD operations for scholarship forms.
pub struct ScholarshipFormRepo;

impl ScholarshipFormRepo {
    /// Create a form and its full definition in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateScholarshipForm,
        slug: &str,
    ) -> Result<ScholarshipForm, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO scholarship_forms (title, slug, description, starts_on, deadline, is_active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {FORM_COLUMNS}"
        );
        let form = sqlx::query_as::<_, ScholarshipForm>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(input.starts_on)
            .bind(input.deadline)
            .bind(input.is_active.unwrap_or(true))
            .fetch_one(&mut *tx)
            .await?;

        insert_definition(&mut tx, form.id, &input.sections).await?;

        tx.commit().await?;
        Ok(form)
    }

    /// Find a form by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ScholarshipForm>, sqlx::Error> {
        let query = format!("SELECT {FORM_COLUMNS} FROM scholarship_forms WHERE id = $1");
        sqlx::query_as::<_, ScholarshipForm>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List forms with an optional active filter.
    pub async fn list(
        pool: &PgPool,
        is_active: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ScholarshipForm>, sqlx::Error> {
        let query = format!(
            "SELECT {FORM_COLUMNS} FROM scholarship_forms
             WHERE ($1::BOOL IS NULL OR is_active = $1)
             ORDER BY deadline DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ScholarshipForm>(&query)
            .bind(is_active)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Load the ordered sections-with-fields of a form.
    pub async fn load_definition(
        pool: &PgPool,
        form_id: DbId,
    ) -> Result<Vec<SectionWithFields>, sqlx::Error> {
        let query = format!(
            "SELECT {SECTION_COLUMNS} FROM form_sections
             WHERE form_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        let sections = sqlx::query_as::<_, FormSection>(&query)
            .bind(form_id)
            .fetch_all(pool)
            .await?;

        let fields = Self::fields_for_form(pool, form_id).await?;

        let result = sections
            .into_iter()
            .map(|section| {
                let section_fields = fields
                    .iter()
                    .filter(|f| f.section_id == section.id)
                    .cloned()
                    .collect();
                SectionWithFields {
                    section,
                    fields: section_fields,
                }
            })
            .collect();
        Ok(result)
    }

    /// All fields of a form, ordered by section order then field order.
    /// This ordering is also the export column order.
    pub async fn fields_for_form(
        pool: &PgPool,
        form_id: DbId,
    ) -> Result<Vec<FormField>, sqlx::Error> {
        let query = format!(
            "SELECT f.id, f.section_id, f.label, f.field_type, f.options, f.is_required, f.sort_order
             FROM form_fields f
             JOIN form_sections s ON s.id = f.section_id
             WHERE s.form_id = $1
             ORDER BY s.sort_order ASC, s.id ASC, f.sort_order ASC, f.id ASC"
        );
        sqlx::query_as::<_, FormField>(&query)
            .bind(form_id)
            .fetch_all(pool)
            .await
    }

    /// Update form metadata, replacing the definition when one is supplied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScholarshipForm,
    ) -> Result<ScholarshipForm, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE scholarship_forms SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                starts_on = COALESCE($3, starts_on),
                deadline = COALESCE($4, deadline),
                updated_at = now()
             WHERE id = $5
             RETURNING {FORM_COLUMNS}"
        );
        let form = sqlx::query_as::<_, ScholarshipForm>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.starts_on)
            .bind(input.deadline)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(sections) = &input.sections {
            // Replace the whole definition; cascade removes the fields.
            sqlx::query("DELETE FROM form_sections WHERE form_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            insert_definition(&mut tx, id, sections).await?;
        }

        tx.commit().await?;
        Ok(form)
    }

    /// Flip the active flag.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<ScholarshipForm, sqlx::Error> {
        let query = format!(
            "UPDATE scholarship_forms SET
                is_active = NOT is_active,
                updated_at = now()
             WHERE id = $1
             RETURNING {FORM_COLUMNS}"
        );
        sqlx::query_as::<_, ScholarshipForm>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a form. Sections, fields, and submissions cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM scholarship_forms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

/// Insert a nested definition for `form_id` inside an open transaction.
/// Payload order becomes `sort_order`.
async fn insert_definition(
    tx: &mut Transaction<'_, Postgres>,
    form_id: DbId,
    sections: &[SectionDraft],
) -> Result<(), sqlx::Error> {
    for (si, section) in sections.iter().enumerate() {
        let section_id: DbId = sqlx::query_scalar(
            "INSERT INTO form_sections (form_id, title, description, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(form_id)
        .bind(&section.title)
        .bind(&section.description)
        .bind(si as i32)
        .fetch_one(&mut **tx)
        .await?;

        for (fi, field) in section.fields.iter().enumerate() {
            sqlx::query(
                "INSERT INTO form_fields
                    (section_id, label, field_type, options, is_required, sort_order)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(section_id)
            .bind(&field.label)
            .bind(field.field_type.as_str())
            .bind(&field.options)
            .bind(field.is_required)
            .bind(fi as i32)
            .execute(&mut **tx)
            .await?;
        }
    }
    Ok(())
}
