use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::SqlitePool;
use time::{Date, OffsetDateTime};
use validator::Validate;

use crate::table::DietPlans;

#[derive(Clone)]
pub struct Command {
    pub write_db: SqlitePool,
}

/// Input for assigning a plan to a client. Callers run `validate()` before
/// handing it over.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssignDiet {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default)]
    #[validate(length(max = 120))]
    pub goal: String,
    #[validate(range(min = 1, max = 20000))]
    pub calories_total: Option<i64>,
    #[validate(range(min = 1, max = 365))]
    pub duration_days: Option<i64>,
    pub expires_at: Option<Date>,
}

impl Command {
    /// Assigns a new plan to a client. The validity window opens on the day
    /// of `now`; an explicit `expires_at` overrides `duration_days`.
    pub async fn assign(
        &self,
        client_id: i64,
        now: OffsetDateTime,
        input: AssignDiet,
    ) -> anyhow::Result<i64> {
        let created_at = now.replace_time(time::Time::MIDNIGHT);
        let expires_at = input
            .expires_at
            .map(|date| date.midnight().assume_utc().unix_timestamp());

        let mut statement = sea_query::Query::insert()
            .into_table(DietPlans::Table)
            .columns([
                DietPlans::ClientId,
                DietPlans::Name,
                DietPlans::Content,
                DietPlans::Goal,
                DietPlans::CaloriesTotal,
                DietPlans::CreatedAt,
                DietPlans::DurationDays,
                DietPlans::ExpiresAt,
            ])
            .to_owned();

        statement.values_panic([
            client_id.into(),
            input.name.into(),
            input.content.into(),
            input.goal.into(),
            input.calories_total.into(),
            created_at.unix_timestamp().into(),
            input.duration_days.into(),
            expires_at.into(),
        ]);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(
            client_id,
            diet_id = result.last_insert_rowid(),
            "Diet plan assigned"
        );

        Ok(result.last_insert_rowid())
    }
}
