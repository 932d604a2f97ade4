//! Class session management commands.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveTime;

use ws_core::DayOfWeek;
use ws_db::Database;

pub fn add<W: Write>(
    writer: &mut W,
    db: &mut Database,
    name: &str,
    day: DayOfWeek,
    start: NaiveTime,
    end: NaiveTime,
    location: Option<&str>,
) -> Result<()> {
    let id = db.add_class(name, day, start, end, location)?;
    writeln!(writer, "Added class {id}: {name}")?;
    Ok(())
}

pub fn list<W: Write>(writer: &mut W, db: &Database) -> Result<()> {
    let classes = db.list_classes()?;
    if classes.is_empty() {
        writeln!(writer, "No classes recorded.")?;
        return Ok(());
    }
    for class in classes {
        writeln!(
            writer,
            "{:>4}  {}  {} {}-{}  {}",
            class.id,
            class.name,
            class.day_of_week,
            class.start_time.format("%H:%M"),
            class.end_time.format("%H:%M"),
            class.location.as_deref().unwrap_or("-"),
        )?;
    }
    Ok(())
}

#[expect(clippy::too_many_arguments, reason = "one argument per editable field")]
pub fn edit<W: Write>(
    writer: &mut W,
    db: &mut Database,
    id: i64,
    name: Option<&str>,
    day: Option<DayOfWeek>,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    location: Option<String>,
) -> Result<()> {
    let updated = db.update_class(id, name, day, start, end, location)?;
    writeln!(writer, "Updated class {id}: {}", updated.name)?;
    Ok(())
}

pub fn delete<W: Write>(writer: &mut W, db: &mut Database, id: i64) -> Result<()> {
    db.delete_class(id)?;
    writeln!(writer, "Deleted class {id}")?;
    Ok(())
}
