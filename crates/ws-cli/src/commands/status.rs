//! Status command showing entity counts.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use ws_db::Database;

pub fn run<W: Write>(writer: &mut W, db: &Database, database_path: &Path) -> Result<()> {
    let counts = db.counts()?;
    writeln!(writer, "Work/study scheduler status")?;
    writeln!(writer, "Database: {}", database_path.display())?;
    writeln!(writer, "Classes:   {}", counts.classes)?;
    writeln!(writer, "Employers: {}", counts.employers)?;
    writeln!(writer, "Shifts:    {}", counts.shifts)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{NaiveDate, NaiveTime};
    use insta::assert_snapshot;
    use ws_core::DayOfWeek;

    #[test]
    fn status_reports_counts_for_all_entities() {
        let temp = tempfile::tempdir().unwrap();
        let db_path = temp.path().join("workstudy.db");
        let mut db = Database::open(&db_path).unwrap();

        let cafe = db.add_employer("Campus Cafe", 20.0).unwrap();
        db.add_class(
            "Algebra",
            DayOfWeek::Monday,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            None,
        )
        .unwrap();
        db.add_shift(
            cafe,
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            None,
        )
        .unwrap();

        let mut output = Vec::new();
        run(&mut output, &db, &db_path).unwrap();

        let output = String::from_utf8(output).unwrap();
        let output = output.replace(&db_path.display().to_string(), "[TEMP]/workstudy.db");
        assert_snapshot!(output, @r"
        Work/study scheduler status
        Database: [TEMP]/workstudy.db
        Classes:   1
        Employers: 1
        Shifts:    1
        ");
    }
}
