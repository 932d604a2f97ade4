//! Earnings summary over an optional date range.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::Shift;

/// Accumulated hours and earnings for one employer.
///
/// Keyed by employer id; the name is carried for display only, so two
/// employers sharing a name never merge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployerStat {
    pub employer_id: i64,
    pub name: String,
    pub hours: f64,
    pub earnings: f64,
}

/// Result of a summary computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Inclusive lower bound, unbounded when absent.
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound, unbounded when absent.
    pub end: Option<NaiveDate>,
    /// The selected shifts, in (date, start time) order.
    pub shifts: Vec<Shift>,
    pub total_hours: f64,
    pub total_earnings: f64,
    /// Per-employer breakdown in first-seen order over the selected shifts.
    pub by_employer: Vec<EmployerStat>,
}

/// Computes total hours, total earnings, and a per-employer breakdown for
/// all shifts whose date falls within `[start, end]`.
///
/// `shifts` must be sorted by (date, start time); accumulation follows that
/// order, so floating-point totals are deterministic for identical snapshots.
/// An empty selection yields zeroed totals and empty lists, never an error.
#[must_use]
pub fn compute_summary(
    shifts: &[Shift],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Summary {
    let selected: Vec<Shift> = shifts
        .iter()
        .filter(|shift| start.is_none_or(|bound| shift.date >= bound))
        .filter(|shift| end.is_none_or(|bound| shift.date <= bound))
        .cloned()
        .collect();

    let mut total_hours = 0.0;
    let mut total_earnings = 0.0;
    let mut by_employer: Vec<EmployerStat> = Vec::new();

    for shift in &selected {
        let hours = shift.duration_hours();
        let earned = hours * shift.employer.hourly_rate;
        total_hours += hours;
        total_earnings += earned;

        match by_employer
            .iter_mut()
            .find(|stat| stat.employer_id == shift.employer.id)
        {
            Some(stat) => {
                stat.hours += hours;
                stat.earnings += earned;
            }
            None => by_employer.push(EmployerStat {
                employer_id: shift.employer.id,
                name: shift.employer.name.clone(),
                hours,
                earnings: earned,
            }),
        }
    }

    Summary {
        start,
        end,
        shifts: selected,
        total_hours,
        total_earnings,
        by_employer,
    }
}
