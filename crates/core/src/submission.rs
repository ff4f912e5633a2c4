//! Submission answer evaluation — pure logic, no database access.
//!
//! The handler resolves the form definition into [`FieldSpec`]s and the
//! multipart body into an answer map; this module checks every field of
//! the definition against the supplied answers and reports violations
//! keyed by the multipart part name (`field_<id>`), which is also the
//! key the admin client uses for inline error display.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, FieldErrors};
use crate::form::{parse_options, FieldType};
use crate::types::DbId;

/// A persisted form field, as seen by the evaluator.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub id: DbId,
    pub label: String,
    pub field_type: FieldType,
    /// Comma-separated option list for dropdown fields.
    pub options: Option<String>,
    pub is_required: bool,
}

/// One answer in a submission, stored as-is in the `answers` JSONB map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnswerValue {
    Text {
        value: String,
    },
    File {
        filename: String,
        stored_path: String,
        content_type: String,
        size_bytes: i64,
    },
}

/// The multipart part name (and error key) for a field.
pub fn answer_key(field_id: DbId) -> String {
    format!("field_{field_id}")
}

/// Validate the applicant identity parts of a submission.
pub fn validate_applicant(name: &str, email: &str) -> Result<(), CoreError> {
    use validator::ValidateEmail;

    let mut errors = FieldErrors::new();
    if name.trim().is_empty() {
        errors.push("applicant_name", "Applicant name is required");
    }
    if !email.validate_email() {
        errors.push("applicant_email", "Applicant email must be a valid address");
    }
    errors.into_result()
}

/// Evaluate a full answer map against the form's fields.
///
/// Returns `CoreError::FieldValidation` carrying every violation at once
/// so the applicant sees all problems in a single round trip.
pub fn evaluate_answers(
    fields: &[FieldSpec],
    answers: &BTreeMap<DbId, AnswerValue>,
) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();

    for field in fields {
        let key = answer_key(field.id);
        match answers.get(&field.id) {
            None => {
                if field.is_required {
                    errors.push(key, format!("{} is required", field.label));
                }
            }
            Some(answer) => evaluate_answer(field, answer, &key, &mut errors),
        }
    }

    // Answers that do not belong to any field of this form are rejected
    // outright rather than silently stored.
    for id in answers.keys() {
        if !fields.iter().any(|f| f.id == *id) {
            errors.push(answer_key(*id), "Unknown field for this form");
        }
    }

    errors.into_result()
}

fn evaluate_answer(field: &FieldSpec, answer: &AnswerValue, key: &str, errors: &mut FieldErrors) {
    match (field.field_type, answer) {
        (FieldType::File, AnswerValue::File { .. }) => {}
        (FieldType::File, AnswerValue::Text { .. }) => {
            errors.push(key, format!("{} expects a file upload", field.label));
        }
        (_, AnswerValue::File { .. }) => {
            errors.push(key, format!("{} does not accept a file upload", field.label));
        }
        (field_type, AnswerValue::Text { value }) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                if field.is_required {
                    errors.push(key, format!("{} is required", field.label));
                }
                return;
            }
            match field_type {
                FieldType::Number => {
                    // f64 parsing accepts "NaN" and "inf"; neither is a
                    // meaningful answer.
                    match trimmed.parse::<f64>() {
                        Ok(value) if value.is_finite() => {}
                        _ => errors.push(key, format!("{} must be a number", field.label)),
                    }
                }
                FieldType::Date => {
                    if NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err() {
                        errors.push(key, format!("{} must be a date (YYYY-MM-DD)", field.label));
                    }
                }
                FieldType::Dropdown => {
                    let options = field
                        .options
                        .as_deref()
                        .map(parse_options)
                        .unwrap_or_default();
                    if !options.iter().any(|o| o == trimmed) {
                        errors.push(
                            key,
                            format!(
                                "{} must be one of: {}",
                                field.label,
                                options.join(", ")
                            ),
                        );
                    }
                }
                // Free text; richtext is stored as opaque text.
                FieldType::Text | FieldType::Richtext | FieldType::File => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: DbId, field_type: FieldType, required: bool, options: Option<&str>) -> FieldSpec {
        FieldSpec {
            id,
            label: format!("Field {id}"),
            field_type,
            options: options.map(str::to_string),
            is_required: required,
        }
    }

    fn text(value: &str) -> AnswerValue {
        AnswerValue::Text {
            value: value.to_string(),
        }
    }

    fn file() -> AnswerValue {
        AnswerValue::File {
            filename: "transkrip.pdf".into(),
            stored_path: "storage/uploads/transkrip.pdf".into(),
            content_type: "application/pdf".into(),
            size_bytes: 1024,
        }
    }

    #[test]
    fn missing_required_field_is_keyed_to_that_field() {
        let fields = vec![spec(1, FieldType::Text, true, None)];
        match evaluate_answers(&fields, &BTreeMap::new()) {
            Err(CoreError::FieldValidation(errs)) => {
                assert!(errs.0.contains_key("field_1"));
            }
            other => panic!("expected FieldValidation, got {other:?}"),
        }
    }

    #[test]
    fn blank_required_answer_is_rejected_but_blank_optional_passes() {
        let fields = vec![
            spec(1, FieldType::Text, true, None),
            spec(2, FieldType::Number, false, None),
        ];
        let mut answers = BTreeMap::new();
        answers.insert(1, text("   "));
        answers.insert(2, text(""));
        let err = evaluate_answers(&fields, &answers).unwrap_err();
        match err {
            CoreError::FieldValidation(errs) => {
                assert!(errs.0.contains_key("field_1"));
                assert!(!errs.0.contains_key("field_2"));
            }
            other => panic!("expected FieldValidation, got {other:?}"),
        }
    }

    #[test]
    fn number_and_date_answers_are_parsed() {
        let fields = vec![
            spec(1, FieldType::Number, true, None),
            spec(2, FieldType::Date, true, None),
        ];
        let mut answers = BTreeMap::new();
        answers.insert(1, text("3.75"));
        answers.insert(2, text("2026-04-30"));
        assert!(evaluate_answers(&fields, &answers).is_ok());

        answers.insert(1, text("tiga koma tujuh"));
        answers.insert(2, text("30/04/2026"));
        match evaluate_answers(&fields, &answers) {
            Err(CoreError::FieldValidation(errs)) => {
                assert!(errs.0.contains_key("field_1"));
                assert!(errs.0.contains_key("field_2"));
            }
            other => panic!("expected FieldValidation, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_number_answers_are_rejected() {
        let fields = vec![spec(1, FieldType::Number, true, None)];
        for raw in ["NaN", "inf", "-inf", "infinity"] {
            let mut answers = BTreeMap::new();
            answers.insert(1, text(raw));
            match evaluate_answers(&fields, &answers) {
                Err(CoreError::FieldValidation(errs)) => {
                    assert!(errs.0.contains_key("field_1"), "{raw} slipped through");
                }
                other => panic!("expected FieldValidation for {raw}, got {other:?}"),
            }
        }
    }

    #[test]
    fn dropdown_answer_must_match_an_option() {
        let fields = vec![spec(1, FieldType::Dropdown, true, Some("Teknik, Hukum"))];
        let mut answers = BTreeMap::new();
        answers.insert(1, text("Hukum"));
        assert!(evaluate_answers(&fields, &answers).is_ok());

        answers.insert(1, text("Kedokteran"));
        assert!(evaluate_answers(&fields, &answers).is_err());
    }

    #[test]
    fn file_fields_require_file_answers_and_vice_versa() {
        let fields = vec![
            spec(1, FieldType::File, true, None),
            spec(2, FieldType::Text, false, None),
        ];
        let mut answers = BTreeMap::new();
        answers.insert(1, text("not-a-file"));
        answers.insert(2, file());
        match evaluate_answers(&fields, &answers) {
            Err(CoreError::FieldValidation(errs)) => {
                assert!(errs.0.contains_key("field_1"));
                assert!(errs.0.contains_key("field_2"));
            }
            other => panic!("expected FieldValidation, got {other:?}"),
        }

        let mut answers = BTreeMap::new();
        answers.insert(1, file());
        assert!(evaluate_answers(&fields, &answers).is_ok());
    }

    #[test]
    fn applicant_identity_is_validated() {
        assert!(validate_applicant("Andi", "andi@kampus.ac.id").is_ok());
        match validate_applicant("", "not-an-email") {
            Err(CoreError::FieldValidation(errs)) => {
                assert!(errs.0.contains_key("applicant_name"));
                assert!(errs.0.contains_key("applicant_email"));
            }
            other => panic!("expected FieldValidation, got {other:?}"),
        }
    }

    #[test]
    fn unknown_answer_ids_are_rejected() {
        let fields = vec![spec(1, FieldType::Text, false, None)];
        let mut answers = BTreeMap::new();
        answers.insert(42, text("stray"));
        match evaluate_answers(&fields, &answers) {
            Err(CoreError::FieldValidation(errs)) => {
                assert!(errs.0.contains_key("field_42"));
            }
            other => panic!("expected FieldValidation, got {other:?}"),
        }
    }
}
