//! Core domain logic for the work/study scheduler.
//!
//! This crate contains the fundamental types and logic for:
//! - Entities: class sessions, employers, and work shifts
//! - Conflict detection: shift-vs-class and shift-vs-shift overlaps
//! - Summary aggregation: hours and earnings over an optional date range
//! - Report layout: paginated plain-text pages for both reports

pub mod conflicts;
pub mod interval;
pub mod report;
pub mod summary;
pub mod types;

pub use conflicts::{ClassConflict, ConflictReport, ShiftConflict, detect_conflicts};
pub use interval::overlaps;
pub use report::{PAGE_LINES, Page, format_conflict_report, format_summary_report};
pub use summary::{EmployerStat, Summary, compute_summary};
pub use types::{ClassSession, DayOfWeek, Employer, Shift, ValidationError};
