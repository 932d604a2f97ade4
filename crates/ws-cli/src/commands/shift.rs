//! Shift management commands.

use std::io::Write;

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};

use ws_db::Database;

pub fn add<W: Write>(
    writer: &mut W,
    db: &mut Database,
    employer: i64,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    notes: Option<&str>,
) -> Result<()> {
    let id = db.add_shift(employer, date, start, end, notes)?;
    writeln!(writer, "Added shift {id} on {date}")?;
    Ok(())
}

pub fn list<W: Write>(
    writer: &mut W,
    db: &Database,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let shifts = db.list_shifts(from, to)?;
    if shifts.is_empty() {
        writeln!(writer, "No shifts recorded.")?;
        return Ok(());
    }
    for shift in shifts {
        writeln!(
            writer,
            "{:>4}  {} {}-{}  {}  {}",
            shift.id,
            shift.date.format("%Y-%m-%d"),
            shift.start_time.format("%H:%M"),
            shift.end_time.format("%H:%M"),
            shift.employer.name,
            shift.notes.as_deref().unwrap_or("-"),
        )?;
    }
    Ok(())
}

#[expect(clippy::too_many_arguments, reason = "one argument per editable field")]
pub fn edit<W: Write>(
    writer: &mut W,
    db: &mut Database,
    id: i64,
    employer: Option<i64>,
    date: Option<NaiveDate>,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    notes: Option<String>,
) -> Result<()> {
    let updated = db.update_shift(id, employer, date, start, end, notes)?;
    writeln!(
        writer,
        "Updated shift {id}: {} {}-{} at {}",
        updated.date.format("%Y-%m-%d"),
        updated.start_time.format("%H:%M"),
        updated.end_time.format("%H:%M"),
        updated.employer.name,
    )?;
    Ok(())
}

pub fn delete<W: Write>(writer: &mut W, db: &mut Database, id: i64) -> Result<()> {
    db.delete_shift(id)?;
    writeln!(writer, "Deleted shift {id}")?;
    Ok(())
}
