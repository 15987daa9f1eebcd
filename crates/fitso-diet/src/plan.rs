use serde::{Deserialize, Serialize};
use time::{Date, Duration};

/// Validity window length applied when a plan carries neither an explicit
/// expiry nor a duration.
pub const DEFAULT_DURATION_DAYS: i64 = 30;

/// A nutrition plan assigned to a client, valid from its creation day until
/// its effective expiry day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    pub id: i64,
    pub client_id: i64,
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub goal: String,
    pub calories_total: Option<i64>,
    pub created_at: Date,
    pub duration_days: Option<i64>,
    pub expires_at: Option<Date>,
}

impl DietPlan {
    /// Last day on which the plan is still in effect.
    ///
    /// An explicit `expires_at` wins; otherwise the window is `created_at`
    /// plus `duration_days` (30 when unset). Returns `None` when the window
    /// end is not representable, in which case the plan is treated as never
    /// active.
    pub fn effective_expiry(&self) -> Option<Date> {
        match self.expires_at {
            Some(date) => Some(date),
            None => {
                let days = self.duration_days.unwrap_or(DEFAULT_DURATION_DAYS);
                self.created_at.checked_add(Duration::days(days))
            }
        }
    }

    /// True when `date` falls within `[created_at, effective_expiry]`,
    /// inclusive on both ends.
    pub fn is_active_on(&self, date: Date) -> bool {
        match self.effective_expiry() {
            Some(expiry) => date >= self.created_at && date <= expiry,
            None => false,
        }
    }
}
