use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::{Date, OffsetDateTime};

use crate::{DietPlan, table::DietPlans};

#[derive(Clone)]
pub struct Query {
    pub read_db: SqlitePool,
}

#[derive(Debug, FromRow)]
struct DietPlanRow {
    id: i64,
    client_id: i64,
    name: String,
    content: String,
    goal: String,
    calories_total: Option<i64>,
    created_at: i64,
    duration_days: Option<i64>,
    expires_at: Option<i64>,
}

impl DietPlanRow {
    /// Stored timestamps are unix seconds, truncated to the calendar day
    /// here. An unrepresentable timestamp makes the whole row unusable for
    /// availability checks, so the caller drops it.
    fn into_plan(self) -> Option<DietPlan> {
        let created_at = to_date(self.created_at)?;
        let expires_at = match self.expires_at {
            Some(timestamp) => Some(to_date(timestamp)?),
            None => None,
        };

        Some(DietPlan {
            id: self.id,
            client_id: self.client_id,
            name: self.name,
            content: self.content,
            goal: self.goal,
            calories_total: self.calories_total,
            created_at,
            duration_days: self.duration_days,
            expires_at,
        })
    }
}

fn to_date(timestamp: i64) -> Option<Date> {
    OffsetDateTime::from_unix_timestamp(timestamp)
        .ok()
        .map(|datetime| datetime.date())
}

impl Query {
    pub async fn list_for_client(&self, client_id: i64) -> anyhow::Result<Vec<DietPlan>> {
        let statement = sea_query::Query::select()
            .columns([
                DietPlans::Id,
                DietPlans::ClientId,
                DietPlans::Name,
                DietPlans::Content,
                DietPlans::Goal,
                DietPlans::CaloriesTotal,
                DietPlans::CreatedAt,
                DietPlans::DurationDays,
                DietPlans::ExpiresAt,
            ])
            .from(DietPlans::Table)
            .and_where(Expr::col(DietPlans::ClientId).eq(client_id))
            .order_by(DietPlans::CreatedAt, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, DietPlanRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                let plan = row.into_plan();
                if plan.is_none() {
                    tracing::warn!(diet_id = id, "Skipping diet plan with unrepresentable dates");
                }
                plan
            })
            .collect())
    }

    pub async fn find(&self, id: i64) -> anyhow::Result<Option<DietPlan>> {
        let statement = sea_query::Query::select()
            .columns([
                DietPlans::Id,
                DietPlans::ClientId,
                DietPlans::Name,
                DietPlans::Content,
                DietPlans::Goal,
                DietPlans::CaloriesTotal,
                DietPlans::CreatedAt,
                DietPlans::DurationDays,
                DietPlans::ExpiresAt,
            ])
            .from(DietPlans::Table)
            .and_where(Expr::col(DietPlans::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, DietPlanRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.and_then(DietPlanRow::into_plan))
    }
}
