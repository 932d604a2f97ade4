//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

use ws_core::DayOfWeek;

/// Parses a wall-clock time given as `HH:MM` (or `HH:MM:SS`).
pub fn parse_time_arg(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|err| format!("invalid time {value:?} (expected HH:MM): {err}"))
}

/// Work/study scheduler.
///
/// Tracks recurring class sessions, employers, and work shifts, and derives
/// a conflict report and an earnings summary from them.
#[derive(Debug, Parser)]
#[command(name = "ws", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage recurring class sessions.
    Class {
        #[command(subcommand)]
        action: ClassAction,
    },

    /// Manage employers.
    Employer {
        #[command(subcommand)]
        action: EmployerAction,
    },

    /// Manage work shifts.
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Report overlaps between shifts and classes, and among shifts.
    Conflicts {
        /// Emit the structured conflict data as JSON instead of text pages.
        #[arg(long)]
        json: bool,

        /// Write the paginated report to a file (pages separated by form feed).
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Summarize worked hours and earnings over an optional date range.
    Summary {
        /// Inclusive start date (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Inclusive end date (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Emit the structured summary data as JSON instead of text pages.
        #[arg(long)]
        json: bool,

        /// Write the paginated report to a file (pages separated by form feed).
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show entity counts and the database path.
    Status,
}

/// Class session subcommands.
#[derive(Debug, Subcommand)]
pub enum ClassAction {
    /// Add a class session.
    Add {
        /// Class name.
        name: String,

        /// Weekday the class recurs on (e.g. Monday).
        #[arg(long)]
        day: DayOfWeek,

        /// Start time (HH:MM).
        #[arg(long, value_parser = parse_time_arg)]
        start: NaiveTime,

        /// End time (HH:MM).
        #[arg(long, value_parser = parse_time_arg)]
        end: NaiveTime,

        /// Room or building.
        #[arg(long)]
        location: Option<String>,
    },

    /// List all class sessions.
    List,

    /// Edit a class session; omitted flags keep the current value.
    Edit {
        /// Class id.
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        day: Option<DayOfWeek>,

        #[arg(long, value_parser = parse_time_arg)]
        start: Option<NaiveTime>,

        #[arg(long, value_parser = parse_time_arg)]
        end: Option<NaiveTime>,

        #[arg(long)]
        location: Option<String>,
    },

    /// Delete a class session.
    Delete {
        /// Class id.
        id: i64,
    },
}

/// Employer subcommands.
#[derive(Debug, Subcommand)]
pub enum EmployerAction {
    /// Add an employer.
    Add {
        /// Employer name.
        name: String,

        /// Hourly rate in dollars.
        #[arg(long)]
        rate: f64,
    },

    /// List all employers.
    List,

    /// Edit an employer; omitted flags keep the current value.
    Edit {
        /// Employer id.
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        rate: Option<f64>,
    },

    /// Delete an employer and all of its shifts.
    Delete {
        /// Employer id.
        id: i64,
    },
}

/// Shift subcommands.
#[derive(Debug, Subcommand)]
pub enum ShiftAction {
    /// Add a work shift.
    Add {
        /// Employer id the shift belongs to.
        #[arg(long)]
        employer: i64,

        /// Calendar date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,

        /// Start time (HH:MM).
        #[arg(long, value_parser = parse_time_arg)]
        start: NaiveTime,

        /// End time (HH:MM).
        #[arg(long, value_parser = parse_time_arg)]
        end: NaiveTime,

        /// Free-form notes.
        #[arg(long)]
        notes: Option<String>,
    },

    /// List shifts, optionally bounded by an inclusive date range.
    List {
        /// Inclusive start date (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Inclusive end date (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Edit a shift; omitted flags keep the current value.
    Edit {
        /// Shift id.
        id: i64,

        #[arg(long)]
        employer: Option<i64>,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, value_parser = parse_time_arg)]
        start: Option<NaiveTime>,

        #[arg(long, value_parser = parse_time_arg)]
        end: Option<NaiveTime>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a shift.
    Delete {
        /// Shift id.
        id: i64,
    },
}
