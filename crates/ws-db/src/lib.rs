//! Storage layer for the work/study scheduler.
//!
//! Provides persistence for class sessions, employers, and shifts using
//! `rusqlite`.
//!
//! # Schema
//!
//! Dates are stored as TEXT in `%Y-%m-%d` form and times as TEXT in `%H:%M`
//! form, so lexicographic ordering matches chronological ordering and range
//! queries can compare strings directly. Day-of-week values are stored as the
//! pinned capitalized English names from [`ws_core::DayOfWeek`].
//!
//! Entity invariants (`start < end`, non-negative hourly rate, non-empty
//! names) are validated here at the write boundary, before any row is
//! touched; the computation layer assumes valid entities. A stored value
//! that fails to parse on read is a fatal [`DbError`], never silently
//! skipped.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use thiserror::Error;

use ws_core::{ClassSession, DayOfWeek, Employer, Shift, ValidationError};

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored date failed to parse.
    #[error("invalid date in {column}: {value}")]
    DateParse {
        column: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A stored time failed to parse.
    #[error("invalid time in {column}: {value}")]
    TimeParse {
        column: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// An entity invariant was violated at the write boundary, or a stored
    /// row no longer satisfies it.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A referenced row does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

/// Entity counts for the status overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityCounts {
    pub classes: i64,
    pub employers: i64,
    pub shifts: i64,
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

fn encode_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn encode_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

fn parse_date(column: &'static str, value: &str) -> Result<NaiveDate, DbError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| DbError::DateParse {
        column,
        value: value.to_string(),
        source,
    })
}

fn parse_time(column: &'static str, value: &str) -> Result<NaiveTime, DbError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|source| DbError::TimeParse {
        column,
        value: value.to_string(),
        source,
    })
}

/// Database connection wrapper.
///
/// Wraps a `rusqlite::Connection`, which is `Send` but not `Sync`; use one
/// `Database` per thread or serialize access externally.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection
    /// closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema.
    ///
    /// Idempotent - safe to call on an already-initialized database.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS employers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                hourly_rate REAL NOT NULL DEFAULT 0.0
            );

            -- day_of_week: pinned capitalized English name ('Monday'..'Sunday')
            -- start_time/end_time: '%H:%M'
            CREATE TABLE IF NOT EXISTS classes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                day_of_week TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                location TEXT
            );

            -- date: '%Y-%m-%d', lexicographic order matches chronological
            CREATE TABLE IF NOT EXISTS shifts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                employer_id INTEGER NOT NULL,
                date TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                notes TEXT,
                FOREIGN KEY (employer_id) REFERENCES employers(id) ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_shifts_date ON shifts(date);
            CREATE INDEX IF NOT EXISTS idx_shifts_employer ON shifts(employer_id);
            ",
        )?;
        Ok(())
    }

    // ---------------- employers ----------------

    /// Inserts an employer and returns its id.
    pub fn add_employer(&mut self, name: &str, hourly_rate: f64) -> Result<i64, DbError> {
        let employer = Employer::new(0, name, hourly_rate)?;
        self.conn.execute(
            "INSERT INTO employers (name, hourly_rate) VALUES (?, ?)",
            params![employer.name, employer.hourly_rate],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name, "employer added");
        Ok(id)
    }

    /// Lists all employers in id order.
    pub fn list_employers(&self) -> Result<Vec<Employer>, DbError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, hourly_rate FROM employers ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Employer {
                id: row.get(0)?,
                name: row.get(1)?,
                hourly_rate: row.get(2)?,
            })
        })?;
        let mut employers = Vec::new();
        for row in rows {
            employers.push(row?);
        }
        Ok(employers)
    }

    /// Fetches one employer by id.
    pub fn get_employer(&self, id: i64) -> Result<Option<Employer>, DbError> {
        let employer = self
            .conn
            .query_row(
                "SELECT id, name, hourly_rate FROM employers WHERE id = ?",
                [id],
                |row| {
                    Ok(Employer {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        hourly_rate: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(employer)
    }

    /// Updates an employer, keeping any field whose argument is `None`.
    pub fn update_employer(
        &mut self,
        id: i64,
        name: Option<&str>,
        hourly_rate: Option<f64>,
    ) -> Result<Employer, DbError> {
        let current = self.get_employer(id)?.ok_or(DbError::NotFound {
            entity: "employer",
            id,
        })?;
        let updated = Employer::new(
            id,
            name.unwrap_or(&current.name),
            hourly_rate.unwrap_or(current.hourly_rate),
        )?;
        self.conn.execute(
            "UPDATE employers SET name = ?, hourly_rate = ? WHERE id = ?",
            params![updated.name, updated.hourly_rate, id],
        )?;
        Ok(updated)
    }

    /// Deletes an employer and, via the foreign key, all of its shifts.
    pub fn delete_employer(&mut self, id: i64) -> Result<(), DbError> {
        let deleted = self
            .conn
            .execute("DELETE FROM employers WHERE id = ?", [id])?;
        if deleted == 0 {
            return Err(DbError::NotFound {
                entity: "employer",
                id,
            });
        }
        tracing::debug!(id, "employer deleted");
        Ok(())
    }

    // ---------------- classes ----------------

    /// Inserts a class session and returns its id.
    pub fn add_class(
        &mut self,
        name: &str,
        day_of_week: DayOfWeek,
        start_time: NaiveTime,
        end_time: NaiveTime,
        location: Option<&str>,
    ) -> Result<i64, DbError> {
        let class = ClassSession::new(
            0,
            name,
            day_of_week,
            start_time,
            end_time,
            location.map(str::to_string),
        )?;
        self.conn.execute(
            "
            INSERT INTO classes (name, day_of_week, start_time, end_time, location)
            VALUES (?, ?, ?, ?, ?)
            ",
            params![
                class.name,
                class.day_of_week.as_str(),
                encode_time(class.start_time),
                encode_time(class.end_time),
                class.location,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name, "class added");
        Ok(id)
    }

    /// Lists all class sessions in id order.
    pub fn list_classes(&self) -> Result<Vec<ClassSession>, DbError> {
        let mut stmt = self.conn.prepare(
            "
            SELECT id, name, day_of_week, start_time, end_time, location
            FROM classes
            ORDER BY id ASC
            ",
        )?;
        let rows = stmt.query_map([], class_row)?;
        let mut classes = Vec::new();
        for row in rows {
            classes.push(decode_class(row?)?);
        }
        Ok(classes)
    }

    /// Fetches one class session by id.
    pub fn get_class(&self, id: i64) -> Result<Option<ClassSession>, DbError> {
        let row = self
            .conn
            .query_row(
                "
                SELECT id, name, day_of_week, start_time, end_time, location
                FROM classes
                WHERE id = ?
                ",
                [id],
                class_row,
            )
            .optional()?;
        row.map(decode_class).transpose()
    }

    /// Updates a class session, keeping any field whose argument is `None`.
    pub fn update_class(
        &mut self,
        id: i64,
        name: Option<&str>,
        day_of_week: Option<DayOfWeek>,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        location: Option<String>,
    ) -> Result<ClassSession, DbError> {
        let current = self.get_class(id)?.ok_or(DbError::NotFound {
            entity: "class",
            id,
        })?;
        let updated = ClassSession::new(
            id,
            name.unwrap_or(&current.name),
            day_of_week.unwrap_or(current.day_of_week),
            start_time.unwrap_or(current.start_time),
            end_time.unwrap_or(current.end_time),
            location.or(current.location),
        )?;
        self.conn.execute(
            "
            UPDATE classes
            SET name = ?, day_of_week = ?, start_time = ?, end_time = ?, location = ?
            WHERE id = ?
            ",
            params![
                updated.name,
                updated.day_of_week.as_str(),
                encode_time(updated.start_time),
                encode_time(updated.end_time),
                updated.location,
                id,
            ],
        )?;
        Ok(updated)
    }

    /// Deletes a class session.
    pub fn delete_class(&mut self, id: i64) -> Result<(), DbError> {
        let deleted = self.conn.execute("DELETE FROM classes WHERE id = ?", [id])?;
        if deleted == 0 {
            return Err(DbError::NotFound {
                entity: "class",
                id,
            });
        }
        tracing::debug!(id, "class deleted");
        Ok(())
    }

    // ---------------- shifts ----------------

    /// Inserts a shift for an existing employer and returns its id.
    pub fn add_shift(
        &mut self,
        employer_id: i64,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        notes: Option<&str>,
    ) -> Result<i64, DbError> {
        let employer = self.get_employer(employer_id)?.ok_or(DbError::NotFound {
            entity: "employer",
            id: employer_id,
        })?;
        let shift = Shift::new(
            0,
            employer,
            date,
            start_time,
            end_time,
            notes.map(str::to_string),
        )?;
        self.conn.execute(
            "
            INSERT INTO shifts (employer_id, date, start_time, end_time, notes)
            VALUES (?, ?, ?, ?, ?)
            ",
            params![
                employer_id,
                encode_date(shift.date),
                encode_time(shift.start_time),
                encode_time(shift.end_time),
                shift.notes,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, employer_id, "shift added");
        Ok(id)
    }

    /// Lists shifts joined with their employer, optionally bounded by an
    /// inclusive date range, ordered by (date, start time, id).
    pub fn list_shifts(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Shift>, DbError> {
        let mut sql = String::from(
            "
            SELECT s.id, s.date, s.start_time, s.end_time, s.notes,
                   e.id, e.name, e.hourly_rate
            FROM shifts s
            JOIN employers e ON e.id = s.employer_id
            ",
        );
        let mut clauses = Vec::new();
        let mut bounds = Vec::new();
        if let Some(start) = start {
            clauses.push("s.date >= ?");
            bounds.push(encode_date(start));
        }
        if let Some(end) = end {
            clauses.push("s.date <= ?");
            bounds.push(encode_date(end));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY s.date ASC, s.start_time ASC, s.id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bounds.iter()), shift_row)?;
        let mut shifts = Vec::new();
        for row in rows {
            shifts.push(decode_shift(row?)?);
        }
        Ok(shifts)
    }

    /// Fetches one shift by id, joined with its employer.
    pub fn get_shift(&self, id: i64) -> Result<Option<Shift>, DbError> {
        let row = self
            .conn
            .query_row(
                "
                SELECT s.id, s.date, s.start_time, s.end_time, s.notes,
                       e.id, e.name, e.hourly_rate
                FROM shifts s
                JOIN employers e ON e.id = s.employer_id
                WHERE s.id = ?
                ",
                [id],
                shift_row,
            )
            .optional()?;
        row.map(decode_shift).transpose()
    }

    /// Updates a shift, keeping any field whose argument is `None`.
    pub fn update_shift(
        &mut self,
        id: i64,
        employer_id: Option<i64>,
        date: Option<NaiveDate>,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        notes: Option<String>,
    ) -> Result<Shift, DbError> {
        let current = self.get_shift(id)?.ok_or(DbError::NotFound {
            entity: "shift",
            id,
        })?;
        let employer = match employer_id {
            Some(employer_id) => self.get_employer(employer_id)?.ok_or(DbError::NotFound {
                entity: "employer",
                id: employer_id,
            })?,
            None => current.employer,
        };
        let updated = Shift::new(
            id,
            employer,
            date.unwrap_or(current.date),
            start_time.unwrap_or(current.start_time),
            end_time.unwrap_or(current.end_time),
            notes.or(current.notes),
        )?;
        self.conn.execute(
            "
            UPDATE shifts
            SET employer_id = ?, date = ?, start_time = ?, end_time = ?, notes = ?
            WHERE id = ?
            ",
            params![
                updated.employer.id,
                encode_date(updated.date),
                encode_time(updated.start_time),
                encode_time(updated.end_time),
                updated.notes,
                id,
            ],
        )?;
        Ok(updated)
    }

    /// Deletes a shift.
    pub fn delete_shift(&mut self, id: i64) -> Result<(), DbError> {
        let deleted = self.conn.execute("DELETE FROM shifts WHERE id = ?", [id])?;
        if deleted == 0 {
            return Err(DbError::NotFound {
                entity: "shift",
                id,
            });
        }
        tracing::debug!(id, "shift deleted");
        Ok(())
    }

    /// Entity counts for the status overview.
    pub fn counts(&self) -> Result<EntityCounts, DbError> {
        let count = |table: &str| -> Result<i64, rusqlite::Error> {
            self.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })
        };
        Ok(EntityCounts {
            classes: count("classes")?,
            employers: count("employers")?,
            shifts: count("shifts")?,
        })
    }
}

/// Raw class row before date/time decoding.
struct ClassRow {
    id: i64,
    name: String,
    day_of_week: String,
    start_time: String,
    end_time: String,
    location: Option<String>,
}

fn class_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ClassRow> {
    Ok(ClassRow {
        id: row.get(0)?,
        name: row.get(1)?,
        day_of_week: row.get(2)?,
        start_time: row.get(3)?,
        end_time: row.get(4)?,
        location: row.get(5)?,
    })
}

fn decode_class(row: ClassRow) -> Result<ClassSession, DbError> {
    let day_of_week: DayOfWeek = row.day_of_week.parse()?;
    let start_time = parse_time("classes.start_time", &row.start_time)?;
    let end_time = parse_time("classes.end_time", &row.end_time)?;
    Ok(ClassSession::new(
        row.id,
        row.name,
        day_of_week,
        start_time,
        end_time,
        row.location,
    )?)
}

/// Raw shift row (joined with its employer) before date/time decoding.
struct ShiftRow {
    id: i64,
    date: String,
    start_time: String,
    end_time: String,
    notes: Option<String>,
    employer_id: i64,
    employer_name: String,
    hourly_rate: f64,
}

fn shift_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ShiftRow> {
    Ok(ShiftRow {
        id: row.get(0)?,
        date: row.get(1)?,
        start_time: row.get(2)?,
        end_time: row.get(3)?,
        notes: row.get(4)?,
        employer_id: row.get(5)?,
        employer_name: row.get(6)?,
        hourly_rate: row.get(7)?,
    })
}

fn decode_shift(row: ShiftRow) -> Result<Shift, DbError> {
    let employer = Employer {
        id: row.employer_id,
        name: row.employer_name,
        hourly_rate: row.hourly_rate,
    };
    let date = parse_date("shifts.date", &row.date)?;
    let start_time = parse_time("shifts.start_time", &row.start_time)?;
    let end_time = parse_time("shifts.end_time", &row.end_time)?;
    Ok(Shift::new(
        row.id,
        employer,
        date,
        start_time,
        end_time,
        row.notes,
    )?)
}
