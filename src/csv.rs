// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Build one output row, optionally tagging it with a Qualifier cell.
pub fn build_export_row(base_row: &[String], qualifier: Option<bool>) -> Vec<String> {
    let mut out = base_row.to_owned();
    if let Some(q) = qualifier {
        out.push(s!(if q { "yes" } else { "no" }));
    }
    out
}

/// Create a full export string (Copy/Export) from the table data.
/// - `headers`: base headers (if any)
/// - `rows`: base display rows
/// - `qualifier_rows`: row indexes that qualify; `Some` appends a
///   Qualifier column, `None` leaves the rows untouched
/// - `include_headers`: whether to emit a header line
/// - `sep`: field separator
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    qualifier_rows: Option<&[usize]>,
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let mut h = h.clone();
            if qualifier_rows.is_some() {
                h.push(s!("Qualifier"));
            }
            let _ = write_row(&mut buf, &h, sep);
        }
    }
    for (ix, r) in rows.iter().enumerate() {
        let mapped = build_export_row(r, qualifier_rows.map(|q| q.contains(&ix)));
        let _ = write_row(&mut buf, &mapped, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
