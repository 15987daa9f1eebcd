use serde::Deserialize;
use time::{Date, Duration, Month};

use crate::DietPlan;

/// Bucket size for range filtering relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeFilter {
    Day,
    Week,
    Month,
}

impl RangeFilter {
    pub fn apply(self, plans: &[DietPlan], reference: Date) -> Vec<DietPlan> {
        match self {
            RangeFilter::Day => filter_day(plans, reference),
            RangeFilter::Week => filter_week(plans, reference),
            RangeFilter::Month => filter_month(plans, reference),
        }
    }
}

/// Keeps the plans that are in effect on the reference date itself.
pub fn filter_day(plans: &[DietPlan], reference: Date) -> Vec<DietPlan> {
    plans
        .iter()
        .filter(|plan| plan.is_active_on(reference))
        .cloned()
        .collect()
}

/// Keeps the plans whose window intersects `[reference, reference + 7 days]`.
pub fn filter_week(plans: &[DietPlan], reference: Date) -> Vec<DietPlan> {
    let end = reference
        .checked_add(Duration::days(7))
        .unwrap_or(Date::MAX);

    filter_window(plans, reference, end)
}

/// Keeps the plans whose window intersects `[reference, reference + 1 month]`.
/// Calendar month arithmetic, not a fixed 30-day window.
pub fn filter_month(plans: &[DietPlan], reference: Date) -> Vec<DietPlan> {
    filter_window(plans, reference, add_calendar_month(reference))
}

fn filter_window(plans: &[DietPlan], start: Date, end: Date) -> Vec<DietPlan> {
    plans
        .iter()
        .filter(|plan| match plan.effective_expiry() {
            Some(expiry) => expiry >= start && plan.created_at <= end,
            None => false,
        })
        .cloned()
        .collect()
}

/// One calendar month later, with the day-of-month clamped to the target
/// month's length (Jan 31 -> Feb 28/29).
fn add_calendar_month(date: Date) -> Date {
    let month = date.month().next();
    let year = if month == Month::January {
        date.year() + 1
    } else {
        date.year()
    };
    let day = date.day().min(month.length(year));

    Date::from_calendar_date(year, month, day).unwrap_or(Date::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn plan(id: i64, created_at: Date, duration_days: Option<i64>, expires_at: Option<Date>) -> DietPlan {
        DietPlan {
            id,
            client_id: 1,
            name: format!("Plan {id}"),
            content: String::new(),
            goal: String::new(),
            calories_total: None,
            created_at,
            duration_days,
            expires_at,
        }
    }

    fn ids(plans: &[DietPlan]) -> Vec<i64> {
        plans.iter().map(|plan| plan.id).collect()
    }

    #[test]
    fn test_filter_day_keeps_only_plans_active_on_reference() {
        let plans = vec![
            plan(1, date!(2024 - 03 - 01), Some(7), None),
            plan(2, date!(2024 - 02 - 01), Some(7), None),
        ];

        assert_eq!(ids(&filter_day(&plans, date!(2024 - 03 - 05))), vec![1]);
        assert!(filter_day(&plans, date!(2024 - 02 - 20)).is_empty());
    }

    #[test]
    fn test_filter_week_excludes_plan_starting_after_window() {
        // Plan A expires Mar 2, plan B starts Mar 10; the week window from
        // Mar 1 ends on Mar 8, so only A intersects it.
        let plans = vec![
            plan(1, date!(2024 - 02 - 20), None, Some(date!(2024 - 03 - 02))),
            plan(2, date!(2024 - 03 - 10), Some(7), None),
        ];

        assert_eq!(ids(&filter_week(&plans, date!(2024 - 03 - 01))), vec![1]);
    }

    #[test]
    fn test_filter_month_uses_calendar_month_window() {
        // The window from Jan 31 runs through Feb 29 (leap year, clamped);
        // a plan starting Mar 1 is outside it.
        let plans = vec![
            plan(1, date!(2024 - 02 - 29), Some(7), None),
            plan(2, date!(2024 - 03 - 01), Some(7), None),
        ];

        assert_eq!(ids(&filter_month(&plans, date!(2024 - 01 - 31))), vec![1]);
    }

    #[test]
    fn test_filters_preserve_input_order() {
        let plans = vec![
            plan(3, date!(2024 - 03 - 03), Some(7), None),
            plan(1, date!(2024 - 03 - 01), Some(7), None),
            plan(2, date!(2024 - 03 - 02), Some(7), None),
        ];

        assert_eq!(ids(&filter_day(&plans, date!(2024 - 03 - 04))), vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(filter_day(&[], date!(2024 - 03 - 01)).is_empty());
        assert!(filter_week(&[], date!(2024 - 03 - 01)).is_empty());
        assert!(filter_month(&[], date!(2024 - 03 - 01)).is_empty());
    }

    #[test]
    fn test_add_calendar_month_clamps_day() {
        assert_eq!(add_calendar_month(date!(2024 - 01 - 31)), date!(2024 - 02 - 29));
        assert_eq!(add_calendar_month(date!(2023 - 01 - 31)), date!(2023 - 02 - 28));
        assert_eq!(add_calendar_month(date!(2024 - 12 - 15)), date!(2025 - 01 - 15));
    }
}
