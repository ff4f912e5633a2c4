//! Repository for the `form_submissions` table.

use sqlx::PgPool;
use simawa_core::status::{StatusId, SubmissionStatus};
use simawa_core::types::DbId;

use crate::models::submission::FormSubmission;

/// Column list for form_submissions queries.
const COLUMNS: &str = "id, form_id, applicant_name, applicant_email, answers, \
    status_id, submitted_at, updated_at";

/// Provides CRUD operations for scholarship form submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission with the initial `submitted` status.
    pub async fn create(
        pool: &PgPool,
        form_id: DbId,
        applicant_name: &str,
        applicant_email: &str,
        answers: &serde_json::Value,
    ) -> Result<FormSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO form_submissions
                (form_id, applicant_name, applicant_email, answers, status_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FormSubmission>(&query)
            .bind(form_id)
            .bind(applicant_name)
            .bind(applicant_email)
            .bind(answers)
            .bind(SubmissionStatus::Submitted.id())
            .fetch_one(pool)
            .await
    }

    /// Find a submission by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FormSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM form_submissions WHERE id = $1");
        sqlx::query_as::<_, FormSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List submissions of a form, optionally filtered by status.
    pub async fn list_by_form(
        pool: &PgPool,
        form_id: DbId,
        status_id: Option<StatusId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FormSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM form_submissions
             WHERE form_id = $1
               AND ($2::SMALLINT IS NULL OR status_id = $2)
             ORDER BY submitted_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, FormSubmission>(&query)
            .bind(form_id)
            .bind(status_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// All submissions of a form in submission order, for export.
    pub async fn list_all_by_form(
        pool: &PgPool,
        form_id: DbId,
    ) -> Result<Vec<FormSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM form_submissions
             WHERE form_id = $1
             ORDER BY submitted_at ASC, id ASC"
        );
        sqlx::query_as::<_, FormSubmission>(&query)
            .bind(form_id)
            .fetch_all(pool)
            .await
    }

    /// Move a submission to a new review status.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: SubmissionStatus,
    ) -> Result<FormSubmission, sqlx::Error> {
        let query = format!(
            "UPDATE form_submissions SET
                status_id = $1,
                updated_at = now()
             WHERE id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FormSubmission>(&query)
            .bind(status.id())
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
