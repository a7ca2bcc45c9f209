//! CSV writing and reading
//!
//! Rows are joined with `\n`. A cell is quoted only when it contains a comma,
//! a double quote or a line break; embedded quotes are doubled. Cells without
//! those characters are written verbatim.

use veggieworld_domain::{DashboardError, Result};

use super::tabular::Tabular;

/// Quote a single cell if needed.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn join_row<S: AsRef<str>>(cells: &[S]) -> String {
    cells.iter().map(|cell| escape_field(cell.as_ref())).collect::<Vec<_>>().join(",")
}

/// Header line plus one line per record.
///
/// An empty record set produces the header line alone.
pub fn write_csv<T: Tabular>(records: &[T]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(join_row(T::columns()));
    lines.extend(records.iter().map(|record| join_row(&record.values())));
    lines.join("\n")
}

/// Parsed CSV document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse CSV text produced by [`write_csv`] (or any RFC 4180 style input).
///
/// # Errors
/// Returns `DashboardError::Validation` on an unterminated quoted cell or a
/// row whose width differs from the header.
pub fn parse_csv(text: &str) -> Result<CsvTable> {
    let mut records = split_records(text)?;
    if records.is_empty() {
        return Ok(CsvTable { header: Vec::new(), rows: Vec::new() });
    }

    let header = records.remove(0);
    for (index, row) in records.iter().enumerate() {
        if row.len() != header.len() {
            return Err(DashboardError::validation(
                "csv",
                format!("row {} has {} cells, expected {}", index + 1, row.len(), header.len()),
            ));
        }
    }

    Ok(CsvTable { header, rows: records })
}

fn split_records(text: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                other => cell.push(other),
            }
            continue;
        }

        match ch {
            '"' if cell.is_empty() => in_quotes = true,
            ',' => row.push(std::mem::take(&mut cell)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                row.push(std::mem::take(&mut cell));
                records.push(std::mem::take(&mut row));
            }
            other => cell.push(other),
        }
    }

    if in_quotes {
        return Err(DashboardError::validation("csv", "unterminated quoted cell"));
    }
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        records.push(row);
    }

    Ok(records)
}
