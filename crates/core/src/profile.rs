//! MPM (Majelis Perwakilan Mahasiswa) profile structure and validation.
//!
//! The organizational structure is stored as one JSONB document on the
//! profile row; it is small, read-whole, and edited-whole by the admin
//! UI, so relational decomposition would buy nothing.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, FieldErrors};

/// Organizational structure of an MPM body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgStructure {
    pub chairman: String,
    pub vice_chairman: String,
    pub secretary: String,
    #[serde(default)]
    pub commissions: Vec<Commission>,
}

/// A commission within the organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commission {
    pub name: String,
    pub chief: String,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Validate a profile's name, vision, and mission points.
pub fn validate_profile(name: &str, vision: &str, mission: &[String]) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();

    if name.trim().is_empty() {
        errors.push("name", "Name must not be empty");
    }
    if vision.trim().is_empty() {
        errors.push("vision", "Vision must not be empty");
    }
    if mission.is_empty() {
        errors.push("mission", "At least one mission point is required");
    }
    for (i, point) in mission.iter().enumerate() {
        if point.trim().is_empty() {
            errors.push(format!("mission[{i}]"), "Mission point must not be empty");
        }
    }

    errors.into_result()
}

/// Validate the organizational structure document.
pub fn validate_structure(structure: &OrgStructure) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();

    for (key, value) in [
        ("structure.chairman", &structure.chairman),
        ("structure.vice_chairman", &structure.vice_chairman),
        ("structure.secretary", &structure.secretary),
    ] {
        if value.trim().is_empty() {
            errors.push(key, "Office holder name must not be empty");
        }
    }

    for (i, commission) in structure.commissions.iter().enumerate() {
        if commission.name.trim().is_empty() {
            errors.push(
                format!("structure.commissions[{i}].name"),
                "Commission name must not be empty",
            );
        }
        if commission.chief.trim().is_empty() {
            errors.push(
                format!("structure.commissions[{i}].chief"),
                "Commission chief must not be empty",
            );
        }
        for (mi, member) in commission.members.iter().enumerate() {
            if member.trim().is_empty() {
                errors.push(
                    format!("structure.commissions[{i}].members[{mi}]"),
                    "Member name must not be empty",
                );
            }
        }
    }

    errors.into_result()
}
