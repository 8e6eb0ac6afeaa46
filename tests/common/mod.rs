#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use faculty_registry::api::handlers::health_handler;
use faculty_registry::api::routes::api_routes;
use faculty_registry::state::AppState;
use sqlx::PgPool;

/// Builds a test server running the full route table against `pool`.
pub fn make_server(pool: PgPool) -> TestServer {
    let state = AppState::from_pool(pool);

    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

async fn seed_lookup(pool: &PgPool, table: &str, column: &str, value: &str) -> i64 {
    let sql = format!("INSERT INTO {table} ({column}) VALUES ($1) RETURNING id");
    sqlx::query_scalar(&sql)
        .bind(value)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_office(pool: &PgPool, number: &str) -> i64 {
    seed_lookup(pool, "office", "number", number).await
}

pub async fn seed_degree(pool: &PgPool, name: &str) -> i64 {
    seed_lookup(pool, "degree", "name", name).await
}

pub async fn seed_position(pool: &PgPool, name: &str) -> i64 {
    seed_lookup(pool, "position", "name", name).await
}

pub async fn seed_discipline(pool: &PgPool, name: &str) -> i64 {
    seed_lookup(pool, "discipline", "name", name).await
}

pub async fn seed_teaching_type(pool: &PgPool, name: &str) -> i64 {
    seed_lookup(pool, "teaching_type", "name", name).await
}

pub async fn seed_activity(pool: &PgPool, name: &str) -> i64 {
    seed_lookup(pool, "other_activity", "name", name).await
}

pub async fn seed_work_time(pool: &PgPool, value: f64) -> i64 {
    sqlx::query_scalar("INSERT INTO work_time (value) VALUES ($1) RETURNING id")
        .bind(value)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts a professor with the required references and distinct
/// email/phone derived from `tag`.
pub async fn seed_professor(
    pool: &PgPool,
    tag: &str,
    position_id: i64,
    work_time_id: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO professor \
             (first_name, last_name, birth_date, email, phone_number, position_id, work_time_id) \
         VALUES ($1, $2, '1980-01-01', $3, $4, $5, $6) \
         RETURNING id",
    )
    .bind("Jane")
    .bind(tag)
    .bind(format!("{tag}@x.edu"))
    .bind(&tag[..tag.len().min(11)])
    .bind(position_id)
    .bind(work_time_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Position + work time, the two references every professor needs.
pub async fn seed_required_refs(pool: &PgPool) -> (i64, i64) {
    let position_id = seed_position(pool, "Docent").await;
    let work_time_id = seed_work_time(pool, 1.0).await;
    (position_id, work_time_id)
}
