//! Schema convention checks: these guard the assumptions the repository
//! and API layers make about the database.

use sqlx::PgPool;

/// All `id` columns must be bigint (entity tables) or smallint (lookup tables).
#[sqlx::test(migrations = "./migrations")]
async fn test_all_pks_are_correct_type(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table, data_type) in &rows {
        assert!(
            data_type == "bigint" || data_type == "smallint",
            "Table {table}.id should be bigint or smallint, got {data_type}"
        );
    }
}

/// Unique constraints must be named uq_* so the API layer can map
/// violations to 409 responses.
#[sqlx::test(migrations = "./migrations")]
async fn test_unique_constraints_follow_naming_convention(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, constraint_name
         FROM information_schema.table_constraints
         WHERE constraint_type = 'UNIQUE'
           AND table_schema = 'public'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty(), "Expected at least one unique constraint");
    for (table, constraint) in &rows {
        assert!(
            constraint.starts_with("uq_"),
            "Constraint {constraint} on {table} should be named uq_*"
        );
    }
}

/// The status lookup table must be seeded in the order the domain enum
/// assigns its ids.
#[sqlx::test(migrations = "./migrations")]
async fn test_submission_statuses_match_domain_enum(pool: PgPool) {
    let rows: Vec<(i16, String)> =
        sqlx::query_as("SELECT id, name FROM submission_statuses ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();

    let expected = [
        (1, "submitted"),
        (2, "under_review"),
        (3, "shortlisted"),
        (4, "accepted"),
        (5, "rejected"),
    ];
    assert_eq!(rows.len(), expected.len());
    for ((id, name), (want_id, want_name)) in rows.iter().zip(expected) {
        assert_eq!(*id, want_id);
        assert_eq!(name, want_name);
        assert_eq!(
            simawa_core::status::SubmissionStatus::from_id(*id)
                .unwrap()
                .as_str(),
            *name
        );
    }
}
