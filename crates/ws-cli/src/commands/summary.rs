//! Earnings summary command.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use ws_core::{compute_summary, format_summary_report};
use ws_db::Database;

use super::{emit_pages, save_pages};

/// Computes the earnings summary for the range and renders the report.
pub fn run<W: Write>(
    writer: &mut W,
    db: &Database,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    json: bool,
    out: Option<&Path>,
) -> Result<()> {
    let shifts = db.list_shifts(from, to)?;
    tracing::debug!(shifts = shifts.len(), ?from, ?to, "computing summary");
    let summary = compute_summary(&shifts, from, to);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    let pages = format_summary_report(&summary);
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
