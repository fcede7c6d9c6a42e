//! Row grouping and sheet-name derivation.
//!
//! Groups keep first-occurrence order: the first row seen for a distinct
//! partition value fixes that group's position, which in turn fixes the
//! final sheet order in the workbook.

use crate::types::{Group, Table};
use std::collections::{HashMap, HashSet};

/// Sheet name used in single-sheet mode and for rows whose partition cell
/// renders to the empty string.
pub const DEFAULT_SHEET_NAME: &str = "Data";

/// XLSX sheet names cap at 31 characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const FORBIDDEN_NAME_CHARS: [char; 7] = ['*', ':', '/', '\\', '?', '[', ']'];

/// Result of partitioning: the ordered groups plus whether the single-sheet
/// fallback was taken because the requested column was missing.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionOutcome {
    pub groups: Vec<Group>,
    pub fallback: bool,
}

/// Split a table into groups by the distinct values of `column`.
///
/// When `column` is `None` or names no header entry, the whole table becomes
/// one group labeled [`DEFAULT_SHEET_NAME`]. A requested column that is
/// missing additionally sets the `fallback` flag; that is a diagnostic
/// condition, not an error. Labels are sanitized for
/// sheet-name validity and deduplicated with deterministic `_n` suffixes.
/// The table is consumed; rows move into their groups without copying.
pub fn partition(table: Table, column: Option<&str>) -> PartitionOutcome {
    let col_idx = column.and_then(|name| {
        let idx = table.column_index(name);
        if idx.is_none() {
            tracing::warn!(
                column = name,
                "partition column not found in header, falling back to a single sheet"
            );
        }
        idx
    });

    let Some(col_idx) = col_idx else {
        let mut names = NameAllocator::new();
        let label = names.allocate(DEFAULT_SHEET_NAME);
        return PartitionOutcome {
            groups: vec![Group {
                label,
                rows: table.rows,
            }],
            fallback: column.is_some(),
        };
    };

    // First-occurrence grouping: the raw partition value keys the group,
    // the allocator fixes its final (sanitized, unique) label.
    let mut groups: Vec<Group> = Vec::new();
    let mut index_by_value: HashMap<String, usize> = HashMap::new();
    let mut names = NameAllocator::new();

    for row in table.rows {
        let value = row[col_idx].display();
        match index_by_value.get(&value) {
            Some(&idx) => groups[idx].rows.push(row),
            None => {
                let label = names.allocate(&value);
                index_by_value.insert(value, groups.len());
                groups.push(Group {
                    label,
                    rows: vec![row],
                });
            }
        }
    }

    tracing::debug!(groups = groups.len(), "partitioned rows");

    PartitionOutcome {
        groups,
        fallback: false,
    }
}

/// Hands out sanitized, unique sheet names in request order. Excel treats
/// sheet names as equal ignoring case, so uniqueness is tracked on the
/// lowercased form while the returned name keeps the original casing.
struct NameAllocator {
    taken: HashSet<String>,
}

impl NameAllocator {
    fn new() -> Self {
        Self {
            taken: HashSet::new(),
        }
    }

    fn allocate(&mut self, raw: &str) -> String {
        let base = sanitize_sheet_name(raw);
        let mut candidate = base.clone();
        let mut counter = 1;
        while self.taken.contains(&candidate.to_lowercase()) {
            candidate = disambiguate(&base, counter);
            counter += 1;
        }
        self.taken.insert(candidate.to_lowercase());
        candidate
    }
}

/// Replace characters XLSX forbids in sheet names with underscores and
/// truncate to the 31-character limit. Empty labels become the default name
/// so no sheet ever gets an empty name.
pub fn sanitize_sheet_name(raw: &str) -> String {
    if raw.is_empty() {
        return DEFAULT_SHEET_NAME.to_string();
    }
    raw.chars()
        .map(|c| {
            if FORBIDDEN_NAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .take(MAX_SHEET_NAME_LEN)
        .collect()
}

/// Append `_n`, shortening the base so the result still fits the limit.
fn disambiguate(base: &str, counter: usize) -> String {
    let suffix = format!("_{}", counter);
    let keep = MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count());
    let head: String = base.chars().take(keep).collect();
    format!("{}{}", head, suffix)
}
