//! Sheetsplit - CSV to styled Excel converter
//!
//! This library converts delimited text files into formatted .xlsx
//! workbooks, optionally splitting rows into separate sheets by the
//! distinct values of one column.
//!
//! # Features
//!
//! - Styled output: bold header row, white-on-blue fill, auto-sized columns
//! - One sheet per distinct value of a chosen column, in first-occurrence order
//! - Sheet names sanitized and deduplicated per Excel's naming rules
//! - Lossless cell values: a field is written as a number only when that
//!   cannot change its displayed text
//! - Atomic output: a failed run never leaves a partial .xlsx behind
//!
//! # Example
//!
//! ```no_run
//! use sheetsplit::convert::convert;
//! use std::path::Path;
//!
//! let summary = convert(
//!     Path::new("employees.csv"),
//!     Path::new("employees.xlsx"),
//!     Some("Dept"),
//!     b',',
//! )?;
//!
//! println!("Wrote {} sheets", summary.sheet_count());
//! # Ok::<(), sheetsplit::error::ConvertError>(())
//! ```

pub mod cli;
pub mod convert;
pub mod error;
pub mod partition;
pub mod reader;
pub mod render;
pub mod style;
pub mod types;
pub mod workbook;
pub mod writer;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult, ReadError, WriteError};
pub use types::{CellValue, ConversionSummary, SheetSummary, Table};
