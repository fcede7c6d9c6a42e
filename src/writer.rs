//! Workbook persistence via `rust_xlsxwriter`.
//!
//! The XLSX artifact is fully serialized in memory, written to a temp file
//! next to the destination, then renamed into place. A failed run never
//! leaves a partial or corrupt file at the target path.

use crate::error::WriteError;
use crate::types::{CellValue, Sheet, SheetSummary, WorkbookModel};
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};
use std::fs;
use std::path::Path;

/// Serialize and persist the workbook, returning the per-sheet summaries.
pub fn save(model: &WorkbookModel, path: &Path) -> Result<Vec<SheetSummary>, WriteError> {
    let mut workbook = Workbook::new();
    for sheet in &model.sheets {
        write_sheet(&mut workbook, sheet)?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| WriteError::Xlsx(e.to_string()))?;

    persist_atomically(&buffer, path)?;

    tracing::debug!(sheets = model.sheets.len(), path = %path.display(), "workbook saved");

    Ok(model
        .sheets
        .iter()
        .map(|s| SheetSummary {
            name: s.name.clone(),
            rows: s.row_count(),
        })
        .collect())
}

/// Render one sheet: styled header row, then data rows, then column widths.
fn write_sheet(workbook: &mut Workbook, sheet: &Sheet) -> Result<(), WriteError> {
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(&sheet.name)
        .map_err(|e| WriteError::Xlsx(format!("failed to set sheet name: {}", e)))?;

    let header_format = sheet
        .style
        .as_ref()
        .map(|style| {
            let h = &style.header;
            let mut format = Format::new()
                .set_font_color(Color::RGB(h.font_color))
                .set_background_color(Color::RGB(h.fill_color));
            if h.bold {
                format = format.set_bold();
            }
            if h.centered {
                format = format.set_align(FormatAlign::Center);
            }
            format
        })
        .unwrap_or_else(Format::new);

    for (col, name) in sheet.header.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, name, &header_format)
            .map_err(|e| WriteError::Xlsx(format!("failed to write header: {}", e)))?;
    }

    for (row_idx, row) in sheet.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            write_cell(worksheet, (row_idx + 1) as u32, col as u16, cell)?;
        }
    }

    if let Some(style) = &sheet.style {
        for (col, width) in style.column_widths.iter().enumerate() {
            worksheet
                .set_column_width(col as u16, *width)
                .map_err(|e| WriteError::Xlsx(format!("failed to set column width: {}", e)))?;
        }
    }

    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> Result<(), WriteError> {
    match cell {
        CellValue::Number(n) => {
            worksheet
                .write_number(row, col, *n)
                .map_err(|e| WriteError::Xlsx(format!("failed to write number: {}", e)))?;
        }
        CellValue::Text(s) => {
            worksheet
                .write_string(row, col, s)
                .map_err(|e| WriteError::Xlsx(format!("failed to write text: {}", e)))?;
        }
        CellValue::Empty => {} // blank cell, nothing to write
    }
    Ok(())
}

/// Write the serialized bytes next to the destination and rename into place.
fn persist_atomically(buffer: &[u8], path: &Path) -> Result<(), WriteError> {
    // An existing destination we cannot open for writing is locked (open in
    // a spreadsheet application, or read-only)
    if path.exists() {
        fs::OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    WriteError::TargetLocked(path.to_path_buf())
                }
                _ => WriteError::Io(e),
            })?;
    }

    let tmp_path = match path.file_name() {
        Some(name) => path.with_file_name(format!(".{}.tmp", name.to_string_lossy())),
        None => {
            return Err(WriteError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("output path has no file name: {}", path.display()),
            )))
        }
    };

    fs::write(&tmp_path, buffer).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => WriteError::PermissionDenied(path.to_path_buf()),
        _ => WriteError::Io(e),
    })?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(match e.kind() {
            std::io::ErrorKind::PermissionDenied if path.exists() => {
                WriteError::TargetLocked(path.to_path_buf())
            }
            std::io::ErrorKind::PermissionDenied => {
                WriteError::PermissionDenied(path.to_path_buf())
            }
            _ => WriteError::Io(e),
        });
    }

    Ok(())
}
