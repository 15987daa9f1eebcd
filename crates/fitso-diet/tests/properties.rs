use fitso_diet::{DietPlan, GRID_CELLS, MonthGrid, filter_day, filter_month, filter_week};
use time::macros::date;
use time::{Date, Month};

fn plan(id: i64, created_at: Date, duration_days: Option<i64>, expires_at: Option<Date>) -> DietPlan {
    DietPlan {
        id,
        client_id: 7,
        name: format!("Plan {id}"),
        content: "Breakfast: oats. Lunch: chicken and rice.".to_owned(),
        goal: "weight loss".to_owned(),
        calories_total: Some(2000),
        created_at,
        duration_days,
        expires_at,
    }
}

fn sample_plans() -> Vec<DietPlan> {
    vec![
        plan(1, date!(2024 - 03 - 01), Some(7), None),
        plan(2, date!(2024 - 03 - 10), Some(7), None),
        plan(3, date!(2024 - 02 - 01), None, None),
        plan(4, date!(2024 - 01 - 01), Some(3), None),
        plan(5, date!(2024 - 02 - 20), None, Some(date!(2024 - 03 - 02))),
        plan(6, date!(2024 - 04 - 15), Some(30), None),
    ]
}

fn ids(plans: &[DietPlan]) -> Vec<i64> {
    plans.iter().map(|plan| plan.id).collect()
}

#[test]
fn day_week_month_filters_nest() {
    let plans = sample_plans();
    let references = [
        date!(2024 - 01 - 02),
        date!(2024 - 02 - 15),
        date!(2024 - 03 - 01),
        date!(2024 - 03 - 08),
        date!(2024 - 04 - 01),
        date!(2024 - 12 - 31),
    ];

    for reference in references {
        let day = ids(&filter_day(&plans, reference));
        let week = ids(&filter_week(&plans, reference));
        let month = ids(&filter_month(&plans, reference));

        assert!(
            day.iter().all(|id| week.contains(id)),
            "day filter not a subset of week at {reference}: {day:?} vs {week:?}"
        );
        assert!(
            week.iter().all(|id| month.contains(id)),
            "week filter not a subset of month at {reference}: {week:?} vs {month:?}"
        );
    }
}

#[test]
fn availability_boundaries_match_seven_day_duration() {
    let plans = sample_plans();
    let seven_day = &plans[0]; // created Mar 1, 7 days

    assert!(seven_day.is_active_on(date!(2024 - 03 - 08)));
    assert!(!seven_day.is_active_on(date!(2024 - 03 - 09)));
}

#[test]
fn week_filter_drops_plan_starting_after_window() {
    // Plan 5 expires Mar 2, plan 2 starts Mar 10; from Mar 1 the week window
    // closes on Mar 8, so plan 2 is out.
    let plans = vec![
        plan(5, date!(2024 - 02 - 20), None, Some(date!(2024 - 03 - 02))),
        plan(2, date!(2024 - 03 - 10), Some(7), None),
    ];

    assert_eq!(ids(&filter_week(&plans, date!(2024 - 03 - 01))), vec![5]);
}

#[test]
fn empty_month_grid_shape() {
    let grid = MonthGrid::build(2024, Month::March, &[]).unwrap();

    assert_eq!(grid.days.len(), GRID_CELLS);
    assert!(grid.days.iter().all(|day| !day.has_activity));

    let first = grid.day_at(date!(2024 - 03 - 01)).unwrap();
    assert!(first.is_current_month);
    assert_eq!(first.day_of_month, 1);
}

#[test]
fn first_of_month_always_present_and_current() {
    let plans = sample_plans();

    for month in [
        Month::January,
        Month::February,
        Month::June,
        Month::December,
    ] {
        let grid = MonthGrid::build(2024, month, &plans).unwrap();
        let first = Date::from_calendar_date(2024, month, 1).unwrap();
        let cell = grid.day_at(first).expect("1st must be in the grid");

        assert_eq!(grid.days.len(), GRID_CELLS);
        assert!(cell.is_current_month);
    }
}

#[test]
fn grid_rebuild_is_idempotent_and_leaves_plans_untouched() {
    let plans = sample_plans();
    let before = plans.clone();

    let first = MonthGrid::build(2024, Month::March, &plans).unwrap();
    let second = MonthGrid::build(2024, Month::March, &plans).unwrap();

    assert_eq!(first, second);
    assert_eq!(plans, before);
}

#[test]
fn grid_activity_agrees_with_day_filter() {
    let plans = sample_plans();
    let grid = MonthGrid::build(2024, Month::March, &plans).unwrap();

    for day in &grid.days {
        let expected = filter_day(&plans, day.date);
        assert_eq!(day.has_activity, !expected.is_empty());
        assert_eq!(day.active_plans, expected);
    }
}
