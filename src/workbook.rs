//! Workbook assembly: ordered sheets in, writable workbook model out.

use crate::partition::DEFAULT_SHEET_NAME;
use crate::types::{Sheet, WorkbookModel};

/// Collect styled sheets into a workbook, preserving their order.
///
/// The output format requires at least one sheet, so an empty input yields a
/// workbook with a single empty sheet under the default name — the pipeline
/// always produces a writable artifact. Name uniqueness is established by the
/// partitioner; it is asserted here, not re-derived.
pub fn assemble(sheets: Vec<Sheet>) -> WorkbookModel {
    debug_assert!(unique_names(&sheets), "sheet names must be unique");

    if sheets.is_empty() {
        tracing::debug!("no sheets produced upstream, emitting one empty sheet");
        return WorkbookModel {
            sheets: vec![Sheet {
                name: DEFAULT_SHEET_NAME.to_string(),
                header: Vec::new(),
                rows: Vec::new(),
                style: None,
            }],
        };
    }

    WorkbookModel { sheets }
}

fn unique_names(sheets: &[Sheet]) -> bool {
    let mut seen = std::collections::HashSet::new();
    sheets.iter().all(|s| seen.insert(s.name.to_lowercase()))
}
