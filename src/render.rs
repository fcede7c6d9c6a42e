//! Group → unstyled sheet transformation. Pure, no I/O.

use crate::types::{Group, Sheet};

/// Render a group into an unstyled sheet. The group's label becomes the
/// sheet name and its rows are carried over in received order; styling is
/// filled in later by [`crate::style::apply_style`].
pub fn render(group: Group, header: &[String]) -> Sheet {
    debug_assert!(group.rows.iter().all(|r| r.len() == header.len()));
    Sheet {
        name: group.label,
        header: header.to_vec(),
        rows: group.rows,
        style: None,
    }
}
