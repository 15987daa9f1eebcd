use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use fitso_diet::{AssignDiet, DietPlan, RangeFilter, StatusSummary, summarize};
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::{Date, OffsetDateTime};
use validator::Validate;

use crate::{error::AppError, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub range: Option<RangeFilter>,
    pub date: Option<Date>,
}

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub date: Option<Date>,
}

#[derive(Debug, Serialize)]
pub struct DietDetail {
    #[serde(flatten)]
    pub plan: DietPlan,
    pub effective_expiry: Option<Date>,
    pub remaining: String,
}

fn reference_date(date: Option<Date>) -> Date {
    date.unwrap_or_else(|| OffsetDateTime::now_utc().date())
}

/// GET /api/clients/{client_id}/diets
/// Optionally narrowed with ?range=day|week|month&date=YYYY-MM-DD
#[tracing::instrument(skip_all, fields(client_id))]
pub async fn list(
    State(app): State<AppState>,
    Path(client_id): Path<i64>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<DietPlan>>, AppError> {
    let plans = app.diet_query.list_for_client(client_id).await?;
    let plans = match params.range {
        Some(range) => range.apply(&plans, reference_date(params.date)),
        None => plans,
    };

    Ok(Json(plans))
}

/// GET /api/diets/{id}
pub async fn detail(
    State(app): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DietDetail>, AppError> {
    let plan = app
        .diet_query
        .find(id)
        .await?
        .ok_or(AppError::DietNotFound)?;
    let today = OffsetDateTime::now_utc().date();

    Ok(Json(DietDetail {
        effective_expiry: plan.effective_expiry(),
        remaining: plan.remaining_on(today).to_string(),
        plan,
    }))
}

/// GET /api/clients/{client_id}/diets/status
/// Active/expired rollup as of ?date= (defaults to today)
#[tracing::instrument(skip_all, fields(client_id))]
pub async fn status(
    State(app): State<AppState>,
    Path(client_id): Path<i64>,
    Query(params): Query<StatusParams>,
) -> Result<Json<StatusSummary>, AppError> {
    let plans = app.diet_query.list_for_client(client_id).await?;

    Ok(Json(summarize(&plans, reference_date(params.date))))
}

/// POST /api/clients/{client_id}/diets
#[tracing::instrument(skip_all, fields(client_id))]
pub async fn assign(
    State(app): State<AppState>,
    Path(client_id): Path<i64>,
    Json(input): Json<AssignDiet>,
) -> Result<impl IntoResponse, AppError> {
    input.validate()?;

    let id = app
        .diet_command
        .assign(client_id, OffsetDateTime::now_utc(), input)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}
