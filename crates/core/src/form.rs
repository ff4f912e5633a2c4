//! Scholarship form definition types and validation.
//!
//! A form definition is an ordered list of sections, each holding an
//! ordered list of fields. The definition arrives as one nested JSON
//! payload and is validated here before anything touches the database.
//! Violations are keyed by their position in the payload
//! (`sections[0].fields[2].options`) so the admin UI can highlight the
//! offending input inline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, FieldErrors};

// ---------------------------------------------------------------------------
// Field types
// ---------------------------------------------------------------------------

/// Closed set of input types a form field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Dropdown,
    File,
    Richtext,
}

/// All valid field type names, in declaration order.
pub const VALID_FIELD_TYPES: &[&str] = &["text", "number", "date", "dropdown", "file", "richtext"];

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Dropdown => "dropdown",
            FieldType::File => "file",
            FieldType::Richtext => "richtext",
        }
    }

    /// Parse a stored field type name. Unknown names are an internal
    /// error: the definition validator never lets them into the database.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        match name {
            "text" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            "dropdown" => Ok(FieldType::Dropdown),
            "file" => Ok(FieldType::File),
            "richtext" => Ok(FieldType::Richtext),
            other => Err(CoreError::Internal(format!(
                "Unknown field type '{other}' in database"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Definition drafts (create/update payload shapes)
// ---------------------------------------------------------------------------

/// A section as supplied in a create/update payload. Order in the
/// payload is the display order.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionDraft {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDraft>,
}

/// A field as supplied in a create/update payload.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDraft {
    pub label: String,
    pub field_type: FieldType,
    /// Comma-separated option list; meaningful only for `dropdown`.
    pub options: Option<String>,
    #[serde(default)]
    pub is_required: bool,
}

/// Split a comma-separated option string into trimmed, non-empty options.
pub fn parse_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a form title (non-empty, <= 200 chars).
pub fn validate_form_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.len() > 200 {
        return Err(CoreError::Validation(
            "Title must be at most 200 characters".into(),
        ));
    }
    Ok(())
}

/// Validate the application window: the deadline may not precede the
/// start date.
pub fn validate_window(starts_on: NaiveDate, deadline: NaiveDate) -> Result<(), CoreError> {
    if deadline < starts_on {
        let mut errors = FieldErrors::new();
        errors.push("deadline", "Deadline must not be before the start date");
        return errors.into_result();
    }
    Ok(())
}

/// Validate a full nested definition: at least one section, at least one
/// field per section, non-empty titles/labels, and a non-empty option
/// list on every dropdown field.
pub fn validate_definition(sections: &[SectionDraft]) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();

    if sections.is_empty() {
        errors.push("sections", "A form must have at least one section");
        return errors.into_result();
    }

    for (si, section) in sections.iter().enumerate() {
        if section.title.trim().is_empty() {
            errors.push(
                format!("sections[{si}].title"),
                "Section title must not be empty",
            );
        }
        if section.fields.is_empty() {
            errors.push(
                format!("sections[{si}].fields"),
                "A section must have at least one field",
            );
        }

        for (fi, field) in section.fields.iter().enumerate() {
            if field.label.trim().is_empty() {
                errors.push(
                    format!("sections[{si}].fields[{fi}].label"),
                    "Field label must not be empty",
                );
            }
            if field.field_type == FieldType::Dropdown {
                let options = field.options.as_deref().map(parse_options).unwrap_or_default();
                if options.is_empty() {
                    errors.push(
                        format!("sections[{si}].fields[{fi}].options"),
                        "Dropdown fields must have at least one option",
                    );
                }
            }
        }
    }

    errors.into_result()
}
