//! HTTP-level integration tests for scholarship form management.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_empty, put_json};
use sqlx::PgPool;

/// A representative nested definition payload.
fn sample_form() -> serde_json::Value {
    serde_json::json!({
        "title": "Beasiswa Prestasi 2026",
        "description": "Beasiswa untuk mahasiswa berprestasi.",
        "starts_on": "2026-01-01",
        "deadline": "2026-12-31",
        "sections": [
            {
                "title": "Data Diri",
                "description": "Identitas pendaftar.",
                "fields": [
                    {"label": "Nama Lengkap", "field_type": "text", "is_required": true},
                    {"label": "Tanggal Lahir", "field_type": "date", "is_required": true},
                    {
                        "label": "Fakultas",
                        "field_type": "dropdown",
                        "options": "Teknik, Hukum, Ekonomi",
                        "is_required": true
                    }
                ]
            },
            {
                "title": "Dokumen",
                "fields": [
                    {"label": "IPK", "field_type": "number", "is_required": true},
                    {"label": "Transkrip", "field_type": "file", "is_required": false}
                ]
            }
        ]
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_form_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/forms", sample_form()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "beasiswa-prestasi-2026");
    assert_eq!(json["data"]["is_active"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_form_detail_preserves_definition_order(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/forms", sample_form()).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/forms/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let sections = json["data"]["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["title"], "Data Diri");
    assert_eq!(sections[1]["title"], "Dokumen");

    let fields = sections[0]["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0]["label"], "Nama Lengkap");
    assert_eq!(fields[2]["field_type"], "dropdown");
    assert_eq!(fields[2]["options"], "Teknik, Hukum, Ekonomi");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_form_rejects_invalid_definition(pool: PgPool) {
    let mut payload = sample_form();
    payload["sections"][0]["fields"][2]["options"] = serde_json::Value::Null;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/forms", payload).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["sections[0].fields[2].options"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_form_rejects_empty_sections(pool: PgPool) {
    let mut payload = sample_form();
    payload["sections"] = serde_json::json!([]);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/forms", payload).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(json["fields"]["sections"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_form_rejects_deadline_before_start(pool: PgPool) {
    let mut payload = sample_form();
    payload["starts_on"] = serde_json::json!("2026-12-31");
    payload["deadline"] = serde_json::json!("2026-01-01");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/forms", payload).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(json["fields"]["deadline"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_form_replaces_definition(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/forms", sample_form()).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/forms/{id}"),
        serde_json::json!({
            "title": "Beasiswa Prestasi 2026 (Revisi)",
            "sections": [
                {
                    "title": "Ringkas",
                    "fields": [
                        {"label": "Nama", "field_type": "text", "is_required": true}
                    ]
                }
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/forms/{id}")).await).await;
    assert_eq!(json["data"]["title"], "Beasiswa Prestasi 2026 (Revisi)");
    let sections = json["data"]["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["title"], "Ringkas");
    assert_eq!(sections[0]["fields"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_form_metadata_keeps_definition(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/forms", sample_form()).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/forms/{id}"),
        serde_json::json!({"description": "Deskripsi baru."}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/forms/{id}")).await).await;
    assert_eq!(json["data"]["description"], "Deskripsi baru.");
    assert_eq!(json["data"]["sections"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_toggle_active(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/forms", sample_form()).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(put_empty(app, &format!("/api/v1/forms/{id}/toggle-active")).await).await;
    assert_eq!(json["data"]["is_active"], false);

    let app = common::build_test_app(pool);
    let json = body_json(put_empty(app, &format!("/api/v1/forms/{id}/toggle-active")).await).await;
    assert_eq!(json["data"]["is_active"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_forms_filters_by_active(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/forms", sample_form()).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let mut second = sample_form();
    second["title"] = serde_json::json!("Beasiswa KIP 2026");
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/forms", second).await;

    let app = common::build_test_app(pool.clone());
    put_empty(app, &format!("/api/v1/forms/{id}/toggle-active")).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/forms?is_active=true").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["slug"], "beasiswa-kip-2026");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_form_cascades(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/forms", sample_form()).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/forms/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/forms/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Sections and fields are gone too.
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM form_sections")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
