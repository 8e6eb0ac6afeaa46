mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_professor_minimal(pool: PgPool) {
    let (position_id, work_time_id) = common::seed_required_refs(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/professors")
        .json(&json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "birth_date": "1980-01-01",
            "email": "jane@x.edu",
            "phone_number": "12345678901",
            "position": position_id,
            "work_time": work_time_id
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body.get("id").is_some());
    assert_eq!(body["first_name"], "Jane");
    assert_eq!(body["disciplines"], json!([]));
    assert_eq!(body["activities"], json!([]));
    assert_eq!(body["office"], json!(null));
    assert_eq!(body["degree"], json!(null));
    // References come back as full objects, not the ids that were sent.
    assert_eq!(body["position"]["name"], "Docent");
    assert_eq!(body["work_time"]["name"], 1.0);
}

#[sqlx::test]
async fn test_create_professor_with_office_and_degree(pool: PgPool) {
    let (position_id, work_time_id) = common::seed_required_refs(&pool).await;
    let office_id = common::seed_office(&pool, "101").await;
    let degree_id = common::seed_degree(&pool, "PhD").await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/professors")
        .json(&json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "third_name": "Maria",
            "birth_date": "1980-01-01",
            "email": "jane@x.edu",
            "phone_number": "12345678901",
            "office": office_id,
            "degree": degree_id,
            "position": position_id,
            "work_time": work_time_id
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["office"]["number"], "101");
    assert_eq!(body["degree"]["name"], "PhD");
    assert_eq!(body["third_name"], "Maria");
}

#[sqlx::test]
async fn test_create_professor_missing_position_field(pool: PgPool) {
    let (_, work_time_id) = common::seed_required_refs(&pool).await;
    let server = common::make_server(pool);

    // No position at all — rejected before reaching the service.
    let response = server
        .post("/api/professors")
        .json(&json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "birth_date": "1980-01-01",
            "email": "jane@x.edu",
            "phone_number": "12345678901",
            "work_time": work_time_id
        }))
        .await;

    assert!(
        response.status_code().is_client_error(),
        "expected client error, got {}",
        response.status_code()
    );
}

#[sqlx::test]
async fn test_create_professor_unknown_position_id(pool: PgPool) {
    let (_, work_time_id) = common::seed_required_refs(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/professors")
        .json(&json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "birth_date": "1980-01-01",
            "email": "jane@x.edu",
            "phone_number": "12345678901",
            "position": 999999,
            "work_time": work_time_id
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["details"]["position"], 999999);
}

#[sqlx::test]
async fn test_create_professor_duplicate_email(pool: PgPool) {
    let (position_id, work_time_id) = common::seed_required_refs(&pool).await;
    let server = common::make_server(pool);

    let payload = |phone: &str| {
        json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "birth_date": "1980-01-01",
            "email": "jane@x.edu",
            "phone_number": phone,
            "position": position_id,
            "work_time": work_time_id
        })
    };

    server
        .post("/api/professors")
        .json(&payload("11111111111"))
        .await
        .assert_status(StatusCode::CREATED);

    // Same email, different phone — uniqueness violation surfaces as 409,
    // not as a generic validation error.
    let response = server
        .post("/api/professors")
        .json(&payload("22222222222"))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
}

#[sqlx::test]
async fn test_create_professor_duplicate_phone(pool: PgPool) {
    let (position_id, work_time_id) = common::seed_required_refs(&pool).await;
    let server = common::make_server(pool);

    server
        .post("/api/professors")
        .json(&json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "birth_date": "1980-01-01",
            "email": "jane@x.edu",
            "phone_number": "12345678901",
            "position": position_id,
            "work_time": work_time_id
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/professors")
        .json(&json!({
            "first_name": "John",
            "last_name": "Roe",
            "birth_date": "1975-06-15",
            "email": "john@x.edu",
            "phone_number": "12345678901",
            "position": position_id,
            "work_time": work_time_id
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_create_professor_first_name_too_long(pool: PgPool) {
    let (position_id, work_time_id) = common::seed_required_refs(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .post("/api/professors")
        .json(&json!({
            "first_name": "J".repeat(21),
            "last_name": "Doe",
            "birth_date": "1980-01-01",
            "email": "jane@x.edu",
            "phone_number": "12345678901",
            "position": position_id,
            "work_time": work_time_id
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ─── RETRIEVE / LIST ─────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_retrieve_professor_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/professors/999999").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_professor_list(pool: PgPool) {
    let (position_id, work_time_id) = common::seed_required_refs(&pool).await;
    common::seed_professor(&pool, "Doe", position_id, work_time_id).await;
    common::seed_professor(&pool, "Roe", position_id, work_time_id).await;
    let server = common::make_server(pool);

    let response = server.get("/api/professors").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["position"]["name"], "Docent");
    assert!(items[0]["disciplines"].is_array());
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_professor(pool: PgPool) {
    let (position_id, work_time_id) = common::seed_required_refs(&pool).await;
    let id = common::seed_professor(&pool, "Doe", position_id, work_time_id).await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/api/professors/{id}"))
        .json(&json!({
            "first_name": "Janet",
            "last_name": "Doe",
            "birth_date": "1980-01-01",
            "email": "janet@x.edu",
            "phone_number": "98765432109",
            "position": position_id,
            "work_time": work_time_id
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["first_name"], "Janet");
    assert_eq!(body["email"], "janet@x.edu");
}

#[sqlx::test]
async fn test_update_professor_not_found(pool: PgPool) {
    let (position_id, work_time_id) = common::seed_required_refs(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .put("/api/professors/999999")
        .json(&json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "birth_date": "1980-01-01",
            "email": "jane@x.edu",
            "phone_number": "12345678901",
            "position": position_id,
            "work_time": work_time_id
        }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_professor(pool: PgPool) {
    let (position_id, work_time_id) = common::seed_required_refs(&pool).await;
    let id = common::seed_professor(&pool, "Doe", position_id, work_time_id).await;
    let server = common::make_server(pool.clone());

    server
        .delete(&format!("/api/professors/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/professors/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_referenced_position_rejected(pool: PgPool) {
    // Restrict delete policy: a position referenced by a professor cannot
    // be removed; the violation surfaces as 409.
    let (position_id, work_time_id) = common::seed_required_refs(&pool).await;
    common::seed_professor(&pool, "Doe", position_id, work_time_id).await;
    let server = common::make_server(pool);

    let response = server.delete(&format!("/api/positions/{position_id}")).await;

    response.assert_status(StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
}
