mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

async fn seed_record_refs(pool: &PgPool) -> i64 {
    let (position_id, work_time_id) = common::seed_required_refs(pool).await;
    let professor_id = common::seed_professor(pool, "Doe", position_id, work_time_id).await;
    common::seed_activity(pool, "Curator").await;
    professor_id
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_record_with_embedded_activity(pool: PgPool) {
    let professor_id = seed_record_refs(&pool).await;
    let server = common::make_server(pool);

    // The activity is sent as an embedded object, not a bare id.
    let response = server
        .post("/api/professor-activities")
        .json(&json!({
            "professor": professor_id,
            "activity": { "name": "Curator" },
            "description": "First-year group"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body.get("id").is_some());
    assert_eq!(body["professor"]["last_name"], "Doe");
    assert_eq!(body["activity"]["name"], "Curator");
    assert_eq!(body["description"], "First-year group");
}

#[sqlx::test]
async fn test_create_record_without_description(pool: PgPool) {
    let professor_id = seed_record_refs(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/professor-activities")
        .json(&json!({
            "professor": professor_id,
            "activity": { "name": "Curator" }
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<serde_json::Value>()["description"],
        json!(null)
    );
}

#[sqlx::test]
async fn test_create_record_unknown_activity_name(pool: PgPool) {
    let professor_id = seed_record_refs(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/professor-activities")
        .json(&json!({
            "professor": professor_id,
            "activity": { "name": "Ghost" }
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["details"]["activity"], "Ghost");
}

#[sqlx::test]
async fn test_create_record_unknown_professor(pool: PgPool) {
    common::seed_activity(&pool, "Curator").await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/professor-activities")
        .json(&json!({
            "professor": 999999,
            "activity": { "name": "Curator" }
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_create_record_duplicate_pair(pool: PgPool) {
    let professor_id = seed_record_refs(&pool).await;
    let server = common::make_server(pool);

    let payload = json!({
        "professor": professor_id,
        "activity": { "name": "Curator" }
    });

    server
        .post("/api/professor-activities")
        .json(&payload)
        .await
        .assert_status(StatusCode::CREATED);

    // Same (professor, activity) pair a second time — 409.
    let response = server
        .post("/api/professor-activities")
        .json(&payload)
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_professor_read_includes_activities(pool: PgPool) {
    let professor_id = seed_record_refs(&pool).await;
    let server = common::make_server(pool);

    server
        .post("/api/professor-activities")
        .json(&json!({
            "professor": professor_id,
            "activity": { "name": "Curator" },
            "description": "First-year group"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get(&format!("/api/professors/{professor_id}")).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let activities = body["activities"].as_array().unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0]["activity"]["name"], "Curator");
    assert_eq!(activities[0]["description"], "First-year group");
    // Nested under a professor, the record does not echo the professor.
    assert!(activities[0].get("professor").is_none());
}

// ─── UPDATE / DELETE ─────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_record_description(pool: PgPool) {
    let professor_id = seed_record_refs(&pool).await;
    let server = common::make_server(pool);

    let created = server
        .post("/api/professor-activities")
        .json(&json!({
            "professor": professor_id,
            "activity": { "name": "Curator" }
        }))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/professor-activities/{id}"))
        .json(&json!({
            "professor": professor_id,
            "activity": { "name": "Curator" },
            "description": "Updated"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["description"],
        "Updated"
    );
}

#[sqlx::test]
async fn test_delete_record(pool: PgPool) {
    let professor_id = seed_record_refs(&pool).await;
    let server = common::make_server(pool);

    let created = server
        .post("/api/professor-activities")
        .json(&json!({
            "professor": professor_id,
            "activity": { "name": "Curator" }
        }))
        .await;
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    server
        .delete(&format!("/api/professor-activities/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/professor-activities/{id}"))
        .await
        .assert_status_not_found();
}
