//! Plain-text report layout.
//!
//! Reports are rendered as ordered lines grouped into fixed-size pages; the
//! caller owns the output format (page banners on a terminal, form feeds in
//! a file). The page bound fits a letter page at 15pt leading with a 50pt
//! bottom margin.

use chrono::{NaiveDate, NaiveTime};

use crate::conflicts::ConflictReport;
use crate::summary::Summary;
use crate::types::Shift;

/// Maximum number of lines on one page.
pub const PAGE_LINES: usize = 50;

/// One page of report text.
pub type Page = Vec<String>;

/// Accumulates lines into pages, breaking at [`PAGE_LINES`].
#[derive(Debug, Default)]
struct PageWriter {
    pages: Vec<Page>,
    current: Page,
}

impl PageWriter {
    fn push(&mut self, line: impl Into<String>) {
        if self.current.len() == PAGE_LINES {
            self.pages.push(std::mem::take(&mut self.current));
        }
        self.current.push(line.into());
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

fn fmt_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn fmt_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Absent optional text renders as a dash so the line templates stay readable.
fn text_or_dash(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => "-",
    }
}

fn shift_span(shift: &Shift) -> String {
    format!("{}-{}", fmt_time(shift.start_time), fmt_time(shift.end_time))
}

/// Renders the conflict report as paginated text.
#[must_use]
pub fn format_conflict_report(report: &ConflictReport) -> Vec<Page> {
    let mut out = PageWriter::default();
    out.push("Conflict Report");

    out.push("Class vs Shift Conflicts");
    if report.class_conflicts.is_empty() {
        out.push("No class vs shift conflicts.");
    } else {
        for conflict in &report.class_conflicts {
            out.push(format!(
                "{} {} | {} ({}) conflicts with {} on {} {}-{} at {}",
                fmt_date(conflict.shift.date),
                shift_span(&conflict.shift),
                conflict.shift.employer.name,
                text_or_dash(conflict.shift.notes.as_deref()),
                conflict.class.name,
                conflict.class.day_of_week,
                fmt_time(conflict.class.start_time),
                fmt_time(conflict.class.end_time),
                text_or_dash(conflict.class.location.as_deref()),
            ));
        }
    }

    out.push("Shift vs Shift Conflicts");
    if report.shift_conflicts.is_empty() {
        out.push("No overlapping shifts.");
    } else {
        for conflict in &report.shift_conflicts {
            out.push(format!(
                "{} | {} @ {} ({}) overlaps {} @ {} ({})",
                fmt_date(conflict.first.date),
                shift_span(&conflict.first),
                conflict.first.employer.name,
                text_or_dash(conflict.first.notes.as_deref()),
                shift_span(&conflict.second),
                conflict.second.employer.name,
                text_or_dash(conflict.second.notes.as_deref()),
            ));
        }
    }

    out.finish()
}

/// Renders the earnings summary as paginated text.
#[must_use]
pub fn format_summary_report(summary: &Summary) -> Vec<Page> {
    let mut out = PageWriter::default();
    out.push("Work Summary Report");

    if summary.start.is_some() || summary.end.is_some() {
        let start = summary.start.map_or_else(|| "...".to_string(), fmt_date);
        let end = summary.end.map_or_else(|| "...".to_string(), fmt_date);
        out.push(format!("Period: {start} to {end}"));
    }

    out.push(format!("Total hours: {:.2}", summary.total_hours));
    out.push(format!("Total earnings: ${:.2}", summary.total_earnings));

    out.push("By employer:");
    if summary.by_employer.is_empty() {
        out.push("No shifts in this period.");
    } else {
        for stat in &summary.by_employer {
            out.push(format!(
                "  {}: {:.2} hours, ${:.2}",
                stat.name, stat.hours, stat.earnings
            ));
        }
    }

    out.push("Shifts included:");
    if summary.shifts.is_empty() {
        out.push("No shifts to list.");
    } else {
        for shift in &summary.shifts {
            out.push(format!(
                "  {} {} | {} ({}) [{:.2} hours]",
                fmt_date(shift.date),
                shift_span(shift),
                shift.employer.name,
                text_or_dash(shift.notes.as_deref()),
                shift.duration_hours(),
            ));
        }
    }

    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflicts::detect_conflicts;
    use crate::summary::compute_summary;
    use crate::types::{ClassSession, DayOfWeek, Employer};
    use insta::assert_snapshot;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pages_to_text(pages: &[Page]) -> String {
        pages
            .iter()
            .map(|page| page.join("\n"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn cafe_shift(id: i64, on: NaiveDate, start: NaiveTime, end: NaiveTime) -> Shift {
        let employer = Employer::new(1, "Campus Cafe", 20.0).unwrap();
        Shift::new(id, employer, on, start, end, Some("opening".to_string())).unwrap()
    }

    fn library_shift(id: i64, on: NaiveDate, start: NaiveTime, end: NaiveTime) -> Shift {
        let employer = Employer::new(2, "Library", 15.0).unwrap();
        Shift::new(id, employer, on, start, end, None).unwrap()
    }

    #[test]
    fn empty_conflict_report_renders_placeholder_lines() {
        let pages = format_conflict_report(&ConflictReport::default());
        assert_eq!(pages.len(), 1);
        assert_eq!(
            pages[0],
            vec![
                "Conflict Report",
                "Class vs Shift Conflicts",
                "No class vs shift conflicts.",
                "Shift vs Shift Conflicts",
                "No overlapping shifts.",
            ]
        );
    }

    #[test]
    fn conflict_report_lines() {
        // 2025-01-06 is a Monday
        let classes = [ClassSession::new(
            1,
            "Algebra",
            DayOfWeek::Monday,
            time(10, 0),
            time(11, 0),
            Some("Room 4".to_string()),
        )
        .unwrap()];
        let shifts = [
            cafe_shift(1, date(2025, 1, 6), time(9, 0), time(12, 0)),
            library_shift(2, date(2025, 1, 6), time(10, 30), time(14, 0)),
        ];

        let report = detect_conflicts(&classes, &shifts);
        let pages = format_conflict_report(&report);
        assert_eq!(pages.len(), 1);
        assert_snapshot!(pages_to_text(&pages), @r"
        Conflict Report
        Class vs Shift Conflicts
        2025-01-06 09:00-12:00 | Campus Cafe (opening) conflicts with Algebra on Monday 10:00-11:00 at Room 4
        2025-01-06 10:30-14:00 | Library (-) conflicts with Algebra on Monday 10:00-11:00 at Room 4
        Shift vs Shift Conflicts
        2025-01-06 | 09:00-12:00 @ Campus Cafe (opening) overlaps 10:30-14:00 @ Library (-)
        ");
    }

    #[test]
    fn summary_report_lines() {
        let shifts = [
            cafe_shift(1, date(2025, 1, 6), time(9, 0), time(12, 0)),
            library_shift(2, date(2025, 1, 7), time(13, 0), time(15, 30)),
        ];

        let summary = compute_summary(&shifts, Some(date(2025, 1, 6)), None);
        let pages = format_summary_report(&summary);
        assert_eq!(pages.len(), 1);
        assert_snapshot!(pages_to_text(&pages), @r"
        Work Summary Report
        Period: 2025-01-06 to ...
        Total hours: 5.50
        Total earnings: $97.50
        By employer:
          Campus Cafe: 3.00 hours, $60.00
          Library: 2.50 hours, $37.50
        Shifts included:
          2025-01-06 09:00-12:00 | Campus Cafe (opening) [3.00 hours]
          2025-01-07 13:00-15:30 | Library (-) [2.50 hours]
        ");
    }

    #[test]
    fn empty_summary_renders_placeholder_lines() {
        let summary = compute_summary(&[], None, None);
        let pages = format_summary_report(&summary);
        assert_eq!(pages.len(), 1);
        assert_eq!(
            pages[0],
            vec![
                "Work Summary Report",
                "Total hours: 0.00",
                "Total earnings: $0.00",
                "By employer:",
                "No shifts in this period.",
                "Shifts included:",
                "No shifts to list.",
            ]
        );
    }

    #[test]
    fn period_line_renders_each_bound_combination() {
        let both = compute_summary(&[], Some(date(2025, 1, 1)), Some(date(2025, 2, 1)));
        assert_eq!(
            format_summary_report(&both)[0][1],
            "Period: 2025-01-01 to 2025-02-01"
        );

        let open_start = compute_summary(&[], None, Some(date(2025, 2, 1)));
        assert_eq!(
            format_summary_report(&open_start)[0][1],
            "Period: ... to 2025-02-01"
        );

        let open_end = compute_summary(&[], Some(date(2025, 1, 1)), None);
        assert_eq!(
            format_summary_report(&open_end)[0][1],
            "Period: 2025-01-01 to ..."
        );

        let unbounded = compute_summary(&[], None, None);
        assert_eq!(format_summary_report(&unbounded)[0][1], "Total hours: 0.00");
    }

    #[test]
    fn long_summary_breaks_into_pages_at_the_line_bound() {
        let shifts: Vec<Shift> = (0..60)
            .map(|i| {
                cafe_shift(
                    i + 1,
                    date(2025, 1, 1) + chrono::Duration::days(i),
                    time(9, 0),
                    time(10, 0),
                )
            })
            .collect();

        let summary = compute_summary(&shifts, None, None);
        let pages = format_summary_report(&summary);

        // 1 title + 2 totals + 2 headers + 1 employer stat + 60 shifts = 66 lines
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), PAGE_LINES);
        assert_eq!(pages[1].len(), 16);
        assert!(pages[1][0].starts_with("  2025-02-14"));
    }

    #[test]
    fn rounding_is_pinned_to_two_decimals() {
        // 55 minutes at $13/hr: 0.91666... hours, $11.91666... earned.
        let employer = Employer::new(1, "Campus Cafe", 13.0).unwrap();
        let shift = Shift::new(
            1,
            employer,
            date(2025, 1, 6),
            time(9, 0),
            time(9, 55),
            None,
        )
        .unwrap();

        let summary = compute_summary(&[shift], None, None);
        let page = &format_summary_report(&summary)[0];
        assert_eq!(page[1], "Total hours: 0.92");
        assert_eq!(page[2], "Total earnings: $11.92");
    }
}
