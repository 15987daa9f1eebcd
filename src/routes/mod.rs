use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

mod calendar;
mod diets;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub diet_query: fitso_diet::Query,
    pub diet_command: fitso_diet::Command,
    pub pool: SqlitePool,
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route(
            "/api/clients/{client_id}/diets",
            get(diets::list).post(diets::assign),
        )
        .route("/api/clients/{client_id}/diets/status", get(diets::status))
        .route("/api/diets/{id}", get(diets::detail))
        .route(
            "/api/clients/{client_id}/calendar/{year}/{month}",
            get(calendar::month),
        )
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
