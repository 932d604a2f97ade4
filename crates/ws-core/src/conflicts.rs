//! Conflict detection between shifts and classes, and among shifts.

use serde::Serialize;

use crate::interval::overlaps;
use crate::types::{ClassSession, DayOfWeek, Shift};

/// A shift overlapping a class session on a matching weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassConflict {
    pub shift: Shift,
    pub class: ClassSession,
}

/// Two distinct shifts overlapping on the same date.
///
/// The pair is unordered; `first` is the earlier shift in the scan order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftConflict {
    pub first: Shift,
    pub second: Shift,
}

/// Both conflict lists for a full snapshot of classes and shifts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConflictReport {
    pub class_conflicts: Vec<ClassConflict>,
    pub shift_conflicts: Vec<ShiftConflict>,
}

impl ConflictReport {
    /// True when no conflicts of either kind were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.class_conflicts.is_empty() && self.shift_conflicts.is_empty()
    }
}

/// Detects all conflicts in a snapshot.
///
/// `shifts` must be sorted by (date, start time) and `classes` in a stable
/// caller-chosen order; output order follows input order, so reports are
/// reproducible for identical snapshots.
///
/// Both scans are quadratic, which is fine at personal scale (at most low
/// thousands of shifts). Empty inputs produce empty lists.
#[must_use]
pub fn detect_conflicts(classes: &[ClassSession], shifts: &[Shift]) -> ConflictReport {
    let mut class_conflicts = Vec::new();
    for shift in shifts {
        let day = DayOfWeek::from(shift.date);
        for class in classes {
            if class.day_of_week == day
                && overlaps(
                    shift.start_time,
                    shift.end_time,
                    class.start_time,
                    class.end_time,
                )
            {
                class_conflicts.push(ClassConflict {
                    shift: shift.clone(),
                    class: class.clone(),
                });
            }
        }
    }

    // Each unordered pair is visited exactly once (i < j), so no pair is
    // reported twice and no shift is paired with itself.
    let mut shift_conflicts = Vec::new();
    for (i, first) in shifts.iter().enumerate() {
        for second in &shifts[i + 1..] {
            if first.date == second.date
                && overlaps(
                    first.start_time,
                    first.end_time,
                    second.start_time,
                    second.end_time,
                )
            {
                shift_conflicts.push(ShiftConflict {
                    first: first.clone(),
                    second: second.clone(),
                });
            }
        }
    }

    ConflictReport {
        class_conflicts,
        shift_conflicts,
    }
}
