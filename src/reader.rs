//! Delimited text parsing: file on disk in, immutable [`Table`] out.

use crate::error::ReadError;
use crate::types::{CellValue, Table};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a delimited text file into a [`Table`].
///
/// The first record is always the header. Rows shorter than the header are
/// padded with [`CellValue::Empty`]; rows longer than the header are rejected
/// as [`ReadError::Malformed`] rather than silently truncated. A file with a
/// header but no data rows parses to a table with zero rows; a file with no
/// records at all is [`ReadError::Empty`].
pub fn read_table(path: &Path, delimiter: u8) -> Result<Table, ReadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ReadError::NotFound(path.to_path_buf()),
        _ => ReadError::Io(e),
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(BufReader::new(file));

    let mut records = reader.records();

    let header: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(map_csv_error)?
            .iter()
            .map(|field| field.to_string())
            .collect(),
        None => return Err(ReadError::Empty(path.to_path_buf())),
    };

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    // Line 1 is the header; data starts on line 2
    for (idx, record) in records.enumerate() {
        let record = record.map_err(map_csv_error)?;
        let line = (idx + 2) as u64;

        if record.len() > header.len() {
            return Err(ReadError::Malformed {
                line,
                reason: format!(
                    "row has {} fields but header has {}",
                    record.len(),
                    header.len()
                ),
            });
        }

        let mut row: Vec<CellValue> = record.iter().map(CellValue::from_field).collect();
        row.resize(header.len(), CellValue::Empty);
        rows.push(row);
    }

    tracing::debug!(
        columns = header.len(),
        rows = rows.len(),
        "parsed input table"
    );

    Ok(Table::new(header, rows))
}

fn map_csv_error(err: csv::Error) -> ReadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => ReadError::Io(io_err),
        _ => ReadError::Malformed { line, reason },
    }
}
