//! Employer management commands.

use std::io::Write;

use anyhow::Result;

use ws_db::Database;

pub fn add<W: Write>(writer: &mut W, db: &mut Database, name: &str, rate: f64) -> Result<()> {
    let id = db.add_employer(name, rate)?;
    writeln!(writer, "Added employer {id}: {name} (${rate:.2}/hr)")?;
    Ok(())
}

pub fn list<W: Write>(writer: &mut W, db: &Database) -> Result<()> {
    let employers = db.list_employers()?;
    if employers.is_empty() {
        writeln!(writer, "No employers recorded.")?;
        return Ok(());
    }
    for employer in employers {
        writeln!(
            writer,
            "{:>4}  {}  ${:.2}/hr",
            employer.id, employer.name, employer.hourly_rate
        )?;
    }
    Ok(())
}

pub fn edit<W: Write>(
    writer: &mut W,
    db: &mut Database,
    id: i64,
    name: Option<&str>,
    rate: Option<f64>,
) -> Result<()> {
    let updated = db.update_employer(id, name, rate)?;
    writeln!(
        writer,
        "Updated employer {id}: {} (${:.2}/hr)",
        updated.name, updated.hourly_rate
    )?;
    Ok(())
}

pub fn delete<W: Write>(writer: &mut W, db: &mut Database, id: i64) -> Result<()> {
    db.delete_employer(id)?;
    writeln!(writer, "Deleted employer {id} and its shifts")?;
    Ok(())
}
