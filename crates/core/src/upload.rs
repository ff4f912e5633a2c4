//! Upload constraints for submission file answers.

use crate::error::CoreError;

/// Maximum accepted upload size: 2 MiB.
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// MIME types accepted for file answers.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/webp",
];

/// Validate an uploaded file part against the size and MIME allow-list.
///
/// `field` is the error key the violation should be reported under.
pub fn validate_upload(field: &str, content_type: &str, size_bytes: usize) -> Result<(), CoreError> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "{field}: file exceeds the 2MB upload limit ({size_bytes} bytes)"
        )));
    }
    if !ALLOWED_MIME_TYPES.contains(&content_type) {
        return Err(CoreError::Validation(format!(
            "{field}: unsupported file type '{content_type}'. Allowed: {}",
            ALLOWED_MIME_TYPES.join(", ")
        )));
    }
    Ok(())
}
