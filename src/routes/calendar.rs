use axum::{
    Json,
    extract::{Path, Query, State},
};
use fitso_diet::{CalendarDay, DietPlan, MonthGrid};
use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::{error::AppError, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct CalendarParams {
    pub date: Option<Date>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u8,
    pub days: Vec<CalendarDay>,
    pub selected: Option<SelectedDay>,
}

#[derive(Debug, Serialize)]
pub struct SelectedDay {
    pub date: Date,
    pub plans: Vec<DietPlan>,
}

/// GET /api/clients/{client_id}/calendar/{year}/{month}
/// Month is 1-12. ?date= selects a day whose active plans are echoed back.
#[tracing::instrument(skip_all, fields(client_id, year, month))]
pub async fn month(
    State(app): State<AppState>,
    Path((client_id, year, month)): Path<(i64, i32, u8)>,
    Query(params): Query<CalendarParams>,
) -> Result<Json<CalendarResponse>, AppError> {
    let month = Month::try_from(month)
        .map_err(|_| AppError::Validation(format!("month must be between 1 and 12, got {month}")))?;

    let plans = app.diet_query.list_for_client(client_id).await?;
    let grid = MonthGrid::build(year, month, &plans)?;

    let selected = params
        .date
        .and_then(|date| grid.day_at(date))
        .map(|day| SelectedDay {
            date: day.date,
            plans: day.active_plans.clone(),
        });

    Ok(Json(CalendarResponse {
        year: grid.year,
        month: u8::from(grid.month),
        days: grid.days,
        selected,
    }))
}
