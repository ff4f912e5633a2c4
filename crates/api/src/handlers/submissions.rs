//! Handlers for scholarship form submissions: applicant intake
//! (multipart), review-status workflow, and export.

use std::collections::BTreeMap;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use simawa_core::error::{CoreError, FieldErrors};
use simawa_core::export::build_csv;
use simawa_core::form::FieldType;
use simawa_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use simawa_core::status::SubmissionStatus;
use simawa_core::submission::{
    answer_key, evaluate_answers, validate_applicant, AnswerValue, FieldSpec,
};
use simawa_core::types::DbId;
use simawa_core::upload::validate_upload;
use simawa_db::models::scholarship_form::FormField;
use simawa_db::models::submission::{FormSubmission, UpdateSubmissionStatus};
use simawa_db::repositories::{ScholarshipFormRepo, SubmissionRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::forms::ensure_form;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, serde::Deserialize)]
pub struct ListSubmissionsParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}

/// A file part staged in memory until the whole submission validates.
struct PendingUpload {
    stored_path: std::path::PathBuf,
    data: Vec<u8>,
}

/// Resolve the persisted field rows into evaluator specs.
fn field_specs(fields: &[FormField]) -> AppResult<Vec<FieldSpec>> {
    fields
        .iter()
        .map(|f| {
            Ok(FieldSpec {
                id: f.id,
                label: f.label.clone(),
                field_type: FieldType::parse(&f.field_type).map_err(AppError::Core)?,
                options: f.options.clone(),
                is_required: f.is_required,
            })
        })
        .collect()
}

/// POST /forms/{form_id}/submissions
///
/// Accepts a multipart form: `applicant_name` and `applicant_email` text
/// parts, plus one `field_<id>` part per answered field (text or file).
/// All violations are collected and returned in a single 422 response
/// keyed by part name. Files are staged in memory and only written below
/// the upload directory once the whole submission validates.
pub async fn submit(
    State(state): State<AppState>,
    Path(form_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = ensure_form(&state.pool, form_id).await?;

    if !form.is_active {
        return Err(AppError::Core(CoreError::Conflict(
            "This form is not accepting submissions".into(),
        )));
    }
    let today = chrono::Utc::now().date_naive();
    if today > form.deadline {
        return Err(AppError::Core(CoreError::Conflict(
            "The submission deadline has passed".into(),
        )));
    }

    let fields = ScholarshipFormRepo::fields_for_form(&state.pool, form_id).await?;
    let specs = field_specs(&fields)?;

    // --- Parse the multipart body ---
    let mut applicant_name = String::new();
    let mut applicant_email = String::new();
    let mut answers: BTreeMap<DbId, AnswerValue> = BTreeMap::new();
    // Keyed by field id so a repeated part replaces its predecessor
    // instead of leaving an orphaned staged file.
    let mut pending_uploads: BTreeMap<DbId, PendingUpload> = BTreeMap::new();
    let mut errors = FieldErrors::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "applicant_name" => {
                applicant_name = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "applicant_email" => {
                applicant_email = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            part if part.starts_with("field_") => {
                let field_id: DbId = part
                    .strip_prefix("field_")
                    .and_then(|id| id.parse().ok())
                    .ok_or_else(|| {
                        AppError::BadRequest(format!("Malformed answer part name '{part}'"))
                    })?;

                if let Some(filename) = field.file_name().map(str::to_string) {
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;

                    let key = answer_key(field_id);
                    if let Err(CoreError::Validation(msg)) =
                        validate_upload(&key, &content_type, data.len())
                    {
                        errors.push(key.clone(), msg);
                    }

                    let ext = filename.rsplit('.').next().unwrap_or("bin").to_lowercase();
                    let stored_name = format!(
                        "form{form_id}_field{field_id}_{}.{ext}",
                        chrono::Utc::now().timestamp_micros()
                    );
                    let stored_path = state.config.upload_dir.join(&stored_name);

                    answers.insert(
                        field_id,
                        AnswerValue::File {
                            filename,
                            stored_path: stored_path.to_string_lossy().to_string(),
                            content_type,
                            size_bytes: data.len() as i64,
                        },
                    );
                    pending_uploads.insert(
                        field_id,
                        PendingUpload {
                            stored_path,
                            data: data.to_vec(),
                        },
                    );
                } else {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    answers.insert(field_id, AnswerValue::Text { value });
                    pending_uploads.remove(&field_id);
                }
            }
            _ => {} // ignore unknown parts
        }
    }

    // --- Validate, collecting every violation into one response ---
    if let Err(CoreError::FieldValidation(applicant_errors)) =
        validate_applicant(&applicant_name, &applicant_email)
    {
        errors.merge(applicant_errors);
    }
    match evaluate_answers(&specs, &answers) {
        Ok(()) => {}
        Err(CoreError::FieldValidation(answer_errors)) => errors.merge(answer_errors),
        Err(other) => return Err(AppError::Core(other)),
    }
    errors.into_result().map_err(AppError::Core)?;

    // --- Persist uploads now that the submission is known-good ---
    if !pending_uploads.is_empty() {
        tokio::fs::create_dir_all(&state.config.upload_dir)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        for upload in pending_uploads.values() {
            tokio::fs::write(&upload.stored_path, &upload.data)
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;
        }
    }

    let answers_json = serde_json::to_value(
        answers
            .iter()
            .map(|(id, answer)| (id.to_string(), answer))
            .collect::<BTreeMap<_, _>>(),
    )
    .map_err(|e| AppError::InternalError(e.to_string()))?;

    let submission = match SubmissionRepo::create(
        &state.pool,
        form_id,
        applicant_name.trim(),
        applicant_email.trim(),
        &answers_json,
    )
    .await
    {
        Ok(submission) => submission,
        Err(err) => {
            // Do not leave files behind for a submission that was
            // never recorded.
            for upload in pending_uploads.values() {
                let _ = tokio::fs::remove_file(&upload.stored_path).await;
            }
            return Err(err.into());
        }
    };

    tracing::info!(
        form_id,
        submission_id = submission.id,
        uploads = pending_uploads.len(),
        "Submission received"
    );

    let dto = submission.into_dto().map_err(AppError::Core)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: dto })))
}

/// GET /forms/{form_id}/submissions
///
/// List submissions of a form, optionally filtered by status name.
pub async fn list_by_form(
    State(state): State<AppState>,
    Path(form_id): Path<DbId>,
    Query(params): Query<ListSubmissionsParams>,
) -> AppResult<impl IntoResponse> {
    ensure_form(&state.pool, form_id).await?;

    let status_id = params
        .status
        .as_deref()
        .map(SubmissionStatus::parse)
        .transpose()
        .map_err(AppError::Core)?
        .map(SubmissionStatus::id);

    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);

    let submissions =
        SubmissionRepo::list_by_form(&state.pool, form_id, status_id, limit, offset).await?;
    let dtos = submissions
        .into_iter()
        .map(FormSubmission::into_dto)
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::Core)?;

    Ok(Json(DataResponse { data: dtos }))
}

/// GET /submissions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("FormSubmission", id)))?;

    let dto = submission.into_dto().map_err(AppError::Core)?;
    Ok(Json(DataResponse { data: dto }))
}

/// PUT /submissions/{id}/status
///
/// Move a submission to a new review stage. Unknown status names → 400.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSubmissionStatus>,
) -> AppResult<impl IntoResponse> {
    let status = SubmissionStatus::parse(&input.status).map_err(AppError::Core)?;

    SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("FormSubmission", id)))?;

    let submission = SubmissionRepo::update_status(&state.pool, id, status).await?;

    tracing::info!(submission_id = id, status = status.as_str(), "Submission status updated");

    let dto = submission.into_dto().map_err(AppError::Core)?;
    Ok(Json(DataResponse { data: dto }))
}

/// GET /forms/{form_id}/submissions/export?format=csv|json
///
/// Export every submission of a form. CSV carries one column per form
/// field in definition order; JSON is the default.
pub async fn export(
    State(state): State<AppState>,
    Path(form_id): Path<DbId>,
    Query(params): Query<ExportParams>,
) -> AppResult<impl IntoResponse> {
    let form = ensure_form(&state.pool, form_id).await?;
    let fields = ScholarshipFormRepo::fields_for_form(&state.pool, form_id).await?;
    let submissions = SubmissionRepo::list_all_by_form(&state.pool, form_id).await?;

    let format = params.format.as_deref().unwrap_or("json");
    match format {
        "csv" => {
            let mut header: Vec<String> = vec![
                "id".into(),
                "applicant_name".into(),
                "applicant_email".into(),
                "status".into(),
                "submitted_at".into(),
            ];
            header.extend(fields.iter().map(|f| f.label.clone()));

            let mut rows = Vec::with_capacity(submissions.len());
            for submission in &submissions {
                let status = SubmissionStatus::from_id(submission.status_id)
                    .map_err(AppError::Core)?;
                let mut row = vec![
                    submission.id.to_string(),
                    submission.applicant_name.clone(),
                    submission.applicant_email.clone(),
                    status.as_str().to_string(),
                    submission.submitted_at.to_rfc3339(),
                ];
                for field in &fields {
                    row.push(answer_cell(&submission.answers, field.id));
                }
                rows.push(row);
            }

            let csv = build_csv(&header, &rows);
            let disposition =
                format!("attachment; filename=\"{}-submissions.csv\"", form.slug);

            Ok(axum::response::Response::builder()
                .status(200)
                .header("Content-Type", "text/csv")
                .header("Content-Disposition", disposition)
                .body(axum::body::Body::from(csv))
                .map_err(|e| AppError::InternalError(e.to_string()))?
                .into_response())
        }
        _ => {
            let dtos = submissions
                .into_iter()
                .map(FormSubmission::into_dto)
                .collect::<Result<Vec<_>, _>>()
                .map_err(AppError::Core)?;
            Ok(Json(DataResponse { data: dtos }).into_response())
        }
    }
}

/// Render one answer as an export cell: text answers verbatim, file
/// answers as the original filename, missing answers empty.
fn answer_cell(answers: &serde_json::Value, field_id: DbId) -> String {
    let Some(raw) = answers.get(field_id.to_string()) else {
        return String::new();
    };
    match serde_json::from_value::<AnswerValue>(raw.clone()) {
        Ok(AnswerValue::Text { value }) => value,
        Ok(AnswerValue::File { filename, .. }) => filename,
        Err(_) => String::new(),
    }
}
