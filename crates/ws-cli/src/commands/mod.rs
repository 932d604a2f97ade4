//! CLI subcommand implementations.

use std::io::Write;
use std::path::Path;

use ws_core::Page;

pub mod class;
pub mod conflicts;
pub mod employer;
pub mod shift;
pub mod status;
pub mod summary;

/// Prints report pages to a writer with a banner between pages.
pub(crate) fn emit_pages<W: Write>(writer: &mut W, pages: &[Page]) -> std::io::Result<()> {
    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "--- page {} of {} ---", index + 1, pages.len())?;
        for line in page {
            writeln!(writer, "{line}")?;
        }
    }
    Ok(())
}

/// Writes report pages to a file, separated by form feed, for a downstream
/// plain-text paginator.
pub(crate) fn save_pages(path: &Path, pages: &[Page]) -> std::io::Result<()> {
    let mut text = pages
        .iter()
        .map(|page| page.join("\n"))
        .collect::<Vec<_>>()
        .join("\x0c\n");
    text.push('\n');
    std::fs::write(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_pages_writes_banners() {
        let pages = vec![
            vec!["one".to_string(), "two".to_string()],
            vec!["three".to_string()],
        ];
        let mut output = Vec::new();
        emit_pages(&mut output, &pages).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "--- page 1 of 2 ---\none\ntwo\n\n--- page 2 of 2 ---\nthree\n"
        );
    }

    #[test]
    fn save_pages_separates_pages_with_form_feed() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("report.txt");
        let pages = vec![vec!["one".to_string()], vec!["two".to_string()]];
        save_pages(&path, &pages).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "one\x0c\ntwo\n");
    }
}
