//! Conflict report command.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use ws_core::{detect_conflicts, format_conflict_report};
use ws_db::Database;

use super::{emit_pages, save_pages};

/// Detects conflicts over the full snapshot and renders the report.
pub fn run<W: Write>(
    writer: &mut W,
    db: &Database,
    json: bool,
    out: Option<&Path>,
) -> Result<()> {
    let classes = db.list_classes()?;
    let shifts = db.list_shifts(None, None)?;
    tracing::debug!(
        classes = classes.len(),
        shifts = shifts.len(),
        "detecting conflicts"
    );
    let report = detect_conflicts(&classes, &shifts);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    let pages = format_conflict_report(&report);
    match out {
        Some(path) => {
            save_pages(path, &pages)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(writer, "Wrote {} page(s) to {}", pages.len(), path.display())?;
        }
        None => emit_pages(writer, &pages)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use insta::assert_snapshot;
    use ws_core::DayOfWeek;

    fn seeded_db() -> Database {
        let mut db = Database::open_in_memory().unwrap();
        let cafe = db.add_employer("Campus Cafe", 20.0).unwrap();
        db.add_class(
            "Algebra",
            DayOfWeek::Monday,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            Some("Room 4"),
        )
        .unwrap();
        // 2025-01-06 is a Monday
        db.add_shift(
            cafe,
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            Some("opening"),
        )
        .unwrap();
        db
    }

    #[test]
    fn text_report_includes_detected_conflict() {
        let db = seeded_db();
        let mut output = Vec::new();
        run(&mut output, &db, false, None).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        --- page 1 of 1 ---
        Conflict Report
        Class vs Shift Conflicts
        2025-01-06 09:00-12:00 | Campus Cafe (opening) conflicts with Algebra on Monday 10:00-11:00 at Room 4
        Shift vs Shift Conflicts
        No overlapping shifts.
        ");
    }

    #[test]
    fn json_report_contains_both_lists() {
        let db = seeded_db();
        let mut output = Vec::new();
        run(&mut output, &db, true, None).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["class_conflicts"].as_array().unwrap().len(), 1);
        assert_eq!(value["shift_conflicts"].as_array().unwrap().len(), 0);
        assert_eq!(
            value["class_conflicts"][0]["class"]["name"],
            serde_json::json!("Algebra")
        );
    }

    #[test]
    fn out_flag_writes_file_instead_of_pages() {
        let db = seeded_db();
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("conflicts.txt");

        let mut output = Vec::new();
        run(&mut output, &db, false, Some(&path)).unwrap();

        let status = String::from_utf8(output).unwrap();
        assert!(status.starts_with("Wrote 1 page(s) to "));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Conflict Report"));
    }
}
