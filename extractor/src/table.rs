//! Plain-text rendering of the single-row result table.
//!
//! Columns are sized by terminal display width, so CJK text and emoji
//! stay aligned. Line breaks inside a value are shown as `\n` to keep
//! every row on one line.

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

use crate::models::ExtractionResult;

/// Flatten control line breaks so a cell never spans several lines.
fn one_line(cell: &str) -> Cow<'_, str> {
    if cell.contains(['\n', '\r']) {
        Cow::Owned(cell.replace("\r\n", "\\n").replace(['\n', '\r'], "\\n"))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Render the result as a boxed text table, header row then the data row.
pub fn render_table(result: &ExtractionResult) -> String {
    if result.is_empty() {
        return "(no fields returned)\n".to_string();
    }

    let headers: Vec<Cow<'_, str>> = result.columns().map(one_line).collect();
    let row = result.row();
    let cells: Vec<Cow<'_, str>> = row.iter().map(|c| one_line(c)).collect();
    let widths: Vec<usize> = headers
        .iter()
        .zip(&cells)
        .map(|(h, c)| h.width().max(c.width()))
        .collect();

    let border = {
        let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+\n", segments.join("+"))
    };
    let line = |values: &[Cow<'_, str>]| {
        let padded: Vec<String> = values
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!(" {}{} ", c, " ".repeat(w - c.width())))
            .collect();
        format!("|{}|\n", padded.join("|"))
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&line(&headers));
    out.push_str(&border);
    out.push_str(&line(&cells));
    out.push_str(&border);
    out
}
