//! Form submission models.

use serde::{Deserialize, Serialize};
use simawa_core::error::CoreError;
use simawa_core::status::{StatusId, SubmissionStatus};
use simawa_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `form_submissions` table.
///
/// `answers` is a JSONB map from field id (stringified) to an
/// `AnswerValue` document.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FormSubmission {
    pub id: DbId,
    pub form_id: DbId,
    pub applicant_name: String,
    pub applicant_email: String,
    pub answers: serde_json::Value,
    pub status_id: StatusId,
    pub submitted_at: Timestamp,
    pub updated_at: Timestamp,
}

/// API-facing submission shape: status id resolved to its wire name.
#[derive(Debug, Serialize)]
pub struct SubmissionDto {
    pub id: DbId,
    pub form_id: DbId,
    pub applicant_name: String,
    pub applicant_email: String,
    pub answers: serde_json::Value,
    pub status: &'static str,
    pub submitted_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FormSubmission {
    /// Resolve the status id into its name for API responses.
    pub fn into_dto(self) -> Result<SubmissionDto, CoreError> {
        let status = SubmissionStatus::from_id(self.status_id)?;
        Ok(SubmissionDto {
            id: self.id,
            form_id: self.form_id,
            applicant_name: self.applicant_name,
            applicant_email: self.applicant_email,
            answers: self.answers,
            status: status.as_str(),
            submitted_at: self.submitted_at,
            updated_at: self.updated_at,
        })
    }
}

/// DTO for the status-update endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateSubmissionStatus {
    pub status: String,
}
