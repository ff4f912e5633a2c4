//! CSV building for submission exports.
//!
//! Answers are free text typed by applicants, so every cell goes through
//! RFC 4180 quoting rather than the naive `format!` join that suffices
//! for machine-generated values.

/// Quote a single CSV cell if it contains a comma, quote, or newline.
pub fn csv_cell(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Build a full CSV document from a header row and data rows.
pub fn build_csv(header: &[String], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    push_row(&mut out, header);
    for row in rows {
        push_row(&mut out, row);
    }
    out
}

fn push_row(out: &mut String, row: &[String]) {
    let mut first = true;
    for cell in row {
        if !first {
            out.push(',');
        }
        out.push_str(&csv_cell(cell));
        first = false;
    }
    out.push('\n');
}
