//! HTTP-level integration tests for MPM organization profiles.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn sample_profile() -> serde_json::Value {
    serde_json::json!({
        "name": "MPM Universitas",
        "vision": "Mewujudkan kampus yang aspiratif.",
        "mission": [
            "Menampung aspirasi mahasiswa.",
            "Mengawasi kinerja organisasi kemahasiswaan."
        ],
        "description": "Majelis Permusyawaratan Mahasiswa tingkat universitas.",
        "structure": {
            "chairman": "Andi Wijaya",
            "vice_chairman": "Rina Kusuma",
            "secretary": "Dewi Lestari",
            "commissions": [
                {
                    "name": "Komisi Aspirasi",
                    "chief": "Fajar Nugroho",
                    "members": ["Lia", "Tono"]
                }
            ]
        }
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_profile_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/profiles", sample_profile()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "mpm-universitas");
    assert_eq!(json["data"]["structure"]["chairman"], "Andi Wijaya");
    assert_eq!(json["data"]["mission"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_profile_slug_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/profiles", sample_profile()).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/profiles", sample_profile()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_profile_rejects_empty_mission(pool: PgPool) {
    let mut payload = sample_profile();
    payload["mission"] = serde_json::json!([]);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/profiles", payload).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(json["fields"]["mission"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_profile_rejects_unnamed_commission(pool: PgPool) {
    let mut payload = sample_profile();
    payload["structure"]["commissions"][0]["name"] = serde_json::json!("  ");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/profiles", payload).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_profile_by_slug(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/profiles", sample_profile()).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/profiles/mpm-universitas").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "MPM Universitas");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_profile_structure(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/profiles", sample_profile()).await;

    let mut structure = sample_profile()["structure"].clone();
    structure["chairman"] = serde_json::json!("Pengganti Ketua");

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/profiles/mpm-universitas",
        serde_json::json!({"structure": structure}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["structure"]["chairman"], "Pengganti Ketua");
    // Untouched fields keep their stored values.
    assert_eq!(json["data"]["vision"], "Mewujudkan kampus yang aspiratif.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_profile(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/profiles", sample_profile()).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/v1/profiles/mpm-universitas").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/profiles/mpm-universitas").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
