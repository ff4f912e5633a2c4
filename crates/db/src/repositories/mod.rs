//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod mpm_profile_repo;
pub mod news_repo;
pub mod scholarship_form_repo;
pub mod submission_repo;

pub use category_repo::CategoryRepo;
pub use mpm_profile_repo::MpmProfileRepo;
pub use news_repo::NewsRepo;
pub use scholarship_form_repo::ScholarshipFormRepo;
pub use submission_repo::SubmissionRepo;
