//! Domain logic for the SIMAWA student-affairs portal.
//!
//! Everything in this crate is pure: validation rules, slug generation,
//! the form-definition and submission-answer evaluators, and CSV export
//! building. No database or HTTP dependencies, so the API and repository
//! layers (and any future CLI tooling) can share it.

pub mod error;
pub mod export;
pub mod form;
pub mod news;
pub mod pagination;
pub mod profile;
pub mod slug;
pub mod status;
pub mod submission;
pub mod types;
pub mod upload;
