use serde::Serialize;
use time::{Date, Duration, Month};

use crate::{DietError, DietPlan, filter_day};

/// A month view is always 6 rows of 7 days, Monday first.
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid. Leading and trailing cells belong to the
/// adjacent months and carry `is_current_month = false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: Date,
    pub day_of_month: u8,
    pub is_current_month: bool,
    pub has_activity: bool,
    pub active_plans: Vec<DietPlan>,
}

/// A fully annotated 42-cell month grid. Pure derivation over the supplied
/// plans; rebuild it on every navigation or filter change.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: Month,
    pub days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// Builds the grid for `month`/`year`, starting on the most recent Monday
    /// on or before the 1st. Errors only when the grid would leave the
    /// representable date range.
    pub fn build(year: i32, month: Month, plans: &[DietPlan]) -> Result<Self, DietError> {
        let out_of_range = DietError::GridOutOfRange { year };
        let first = Date::from_calendar_date(year, month, 1).map_err(|_| out_of_range.clone())?;
        let start = first
            .checked_sub(Duration::days(i64::from(
                first.weekday().number_days_from_monday(),
            )))
            .ok_or_else(|| out_of_range.clone())?;

        let mut days = Vec::with_capacity(GRID_CELLS);
        for offset in 0..GRID_CELLS {
            let date = start
                .checked_add(Duration::days(offset as i64))
                .ok_or_else(|| out_of_range.clone())?;
            let active_plans = filter_day(plans, date);

            days.push(CalendarDay {
                date,
                day_of_month: date.day(),
                is_current_month: date.month() == month && date.year() == year,
                has_activity: !active_plans.is_empty(),
                active_plans,
            });
        }

        Ok(Self { year, month, days })
    }

    /// The six Monday-first rows of the grid.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    /// Cell holding `date`, if that day is visible in this grid. Calendar-date
    /// equality, so it also answers "is this cell today / the selected day".
    pub fn day_at(&self, date: Date) -> Option<&CalendarDay> {
        self.days.iter().find(|day| day.date == date)
    }
}

/// The (year, month) pair a calendar view is positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: Month,
}

impl MonthCursor {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Cursor for the month containing `date`, used for "today" navigation.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// One month back, rolling January over to December of the prior year.
    pub fn previous(self) -> Self {
        let year = if self.month == Month::January {
            self.year - 1
        } else {
            self.year
        };

        Self {
            year,
            month: self.month.previous(),
        }
    }

    /// One month forward, rolling December over to January of the next year.
    pub fn next(self) -> Self {
        let year = if self.month == Month::December {
            self.year + 1
        } else {
            self.year
        };

        Self {
            year,
            month: self.month.next(),
        }
    }

    pub fn grid(self, plans: &[DietPlan]) -> Result<MonthGrid, DietError> {
        MonthGrid::build(self.year, self.month, plans)
    }
}
