//! Presentation metadata: header emphasis and per-column widths.

use crate::types::{Sheet, SheetStyle};

/// Padding added to the widest rendered cell in a column.
const WIDTH_PADDING: usize = 2;

/// Narrower than this and the column collapses visually.
const MIN_WIDTH: usize = 1;

/// Attach style metadata to a sheet.
///
/// Column width is the widest rendered text in that column (header cell
/// included) plus a fixed padding, computed from this sheet's own rows only.
/// Two sheets holding different groups of the same table get independent
/// widths. The header emphasis uses the crate defaults.
pub fn apply_style(mut sheet: Sheet) -> Sheet {
    let widths = sheet
        .header
        .iter()
        .enumerate()
        .map(|(col, name)| {
            let data_max = sheet
                .rows
                .iter()
                .map(|row| row[col].display_len())
                .max()
                .unwrap_or(0);
            let chars = name.chars().count().max(data_max) + WIDTH_PADDING;
            chars.max(MIN_WIDTH) as f64
        })
        .collect();

    sheet.style = Some(SheetStyle {
        column_widths: widths,
        header: Default::default(),
    });
    sheet
}
