//! The conversion pipeline: read, partition, render, style, assemble, save.

use crate::error::ConvertResult;
use crate::types::{ConversionSummary, Group};
use crate::{partition, reader, render, style, workbook, writer};
use std::path::Path;

/// Convert a delimited text file into a styled XLSX workbook.
///
/// With `partition_column` set and present in the header, rows are split
/// into one sheet per distinct column value in first-occurrence order.
/// Otherwise the whole table lands on a single sheet; a requested column
/// that is missing from the header flips `partition_fallback` in the
/// returned summary instead of failing.
///
/// The input is fully read and closed before any output I/O starts, and a
/// failed write leaves no partial artifact behind.
pub fn convert(
    input: &Path,
    output: &Path,
    partition_column: Option<&str>,
    delimiter: u8,
) -> ConvertResult<ConversionSummary> {
    let table = reader::read_table(input, delimiter)?;
    let header = table.header.clone();

    let outcome = partition::partition(table, partition_column);
    let fallback = outcome.fallback;

    // Split mode on a table with zero data rows yields zero groups; the
    // output still gets one sheet carrying the header row
    let mut groups = outcome.groups;
    if groups.is_empty() {
        groups.push(Group {
            label: partition::DEFAULT_SHEET_NAME.to_string(),
            rows: Vec::new(),
        });
    }

    let sheets = groups
        .into_iter()
        .map(|group| style::apply_style(render::render(group, &header)))
        .collect();

    let model = workbook::assemble(sheets);

    let sheets = writer::save(&model, output)?;
    Ok(ConversionSummary {
        sheets,
        partition_fallback: fallback,
    })
}
