use std::fmt;

use serde::Serialize;
use time::Date;

use crate::DietPlan;

/// Time left before a plan's window closes, relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    Expired,
    ExpiresToday,
    Days(i64),
    Weeks(i64),
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Remaining::Expired => write!(f, "Expired"),
            Remaining::ExpiresToday => write!(f, "Expires today"),
            Remaining::Days(1) => write!(f, "1 day left"),
            Remaining::Days(days) => write!(f, "{days} days left"),
            Remaining::Weeks(1) => write!(f, "1 week left"),
            Remaining::Weeks(weeks) => write!(f, "{weeks} weeks left"),
        }
    }
}

impl DietPlan {
    /// The expiry day itself reports `ExpiresToday` and is still active,
    /// consistent with the inclusive availability predicate. Up to a week out
    /// is counted in days, beyond that in whole weeks.
    pub fn remaining_on(&self, today: Date) -> Remaining {
        let Some(expiry) = self.effective_expiry() else {
            return Remaining::Expired;
        };

        let days = (expiry - today).whole_days();
        match days {
            i64::MIN..=-1 => Remaining::Expired,
            0 => Remaining::ExpiresToday,
            1..=7 => Remaining::Days(days),
            _ => Remaining::Weeks(days / 7),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanState {
    Active,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanStatus {
    pub id: i64,
    pub name: String,
    pub state: PlanState,
    pub expires_at: Option<Date>,
    pub days_remaining: Option<i64>,
    pub remaining: String,
}

/// Per-client rollup of plan validity, as surfaced on the client dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSummary {
    pub active: usize,
    pub expired: usize,
    pub next_expiry: Option<Date>,
    pub plans: Vec<PlanStatus>,
}

/// Summarizes the plans as of `today`: active/expired counts, the soonest
/// upcoming expiry, and a per-plan status row in input order.
pub fn summarize(plans: &[DietPlan], today: Date) -> StatusSummary {
    let mut summary = StatusSummary {
        active: 0,
        expired: 0,
        next_expiry: None,
        plans: Vec::with_capacity(plans.len()),
    };

    for plan in plans {
        let remaining = plan.remaining_on(today);
        let expires_at = plan.effective_expiry();
        let state = match remaining {
            Remaining::Expired => PlanState::Expired,
            _ => PlanState::Active,
        };

        match state {
            PlanState::Active => {
                summary.active += 1;
                if let Some(expiry) = expires_at {
                    summary.next_expiry = match summary.next_expiry {
                        Some(current) if current <= expiry => Some(current),
                        _ => Some(expiry),
                    };
                }
            }
            PlanState::Expired => summary.expired += 1,
        }

        summary.plans.push(PlanStatus {
            id: plan.id,
            name: plan.name.clone(),
            state,
            expires_at,
            days_remaining: expires_at.map(|expiry| (expiry - today).whole_days()),
            remaining: remaining.to_string(),
        });
    }

    summary
}
