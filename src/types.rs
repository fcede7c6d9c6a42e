//==============================================================================
// Cell values
//==============================================================================

/// A single cell as parsed from the input file.
///
/// A field is classified as `Number` only when parsing it as `f64` and
/// formatting it back reproduces the exact source text. Anything else stays
/// `Text`, so the displayed value in the output is always byte-identical to
/// the input field.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Classify a raw input field.
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(n) = field.parse::<f64>() {
            if n.is_finite() && format!("{}", n) == field {
                return CellValue::Number(n);
            }
        }
        CellValue::Text(field.to_string())
    }

    /// The text a spreadsheet application renders for this cell. Used for
    /// column width computation and for label derivation.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format!("{}", n),
            CellValue::Empty => String::new(),
        }
    }

    /// Rendered text length in characters.
    pub fn display_len(&self) -> usize {
        match self {
            CellValue::Text(s) => s.chars().count(),
            CellValue::Number(n) => format!("{}", n).chars().count(),
            CellValue::Empty => 0,
        }
    }
}

//==============================================================================
// Table and groups
//==============================================================================

/// Parsed delimited input: a header plus rows of cells. Every row has
/// exactly `header.len()` cells (the reader pads short rows with `Empty`).
/// Built once by the reader and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == header.len()));
        Self { header, rows }
    }

    /// Index of a column by header name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }
}

/// A subset of table rows sharing one partition value. The label is already
/// sanitized and unique across the run's groups; it becomes the sheet name.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub label: String,
    pub rows: Vec<Vec<CellValue>>,
}

//==============================================================================
// Sheets and workbook
//==============================================================================

/// Header emphasis directives. Colors are packed 0xRRGGBB values.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStyle {
    pub bold: bool,
    pub font_color: u32,
    pub fill_color: u32,
    pub centered: bool,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        // White-on-blue, the classic report header
        Self {
            bold: true,
            font_color: 0xFFFFFF,
            fill_color: 0x4F81BD,
            centered: true,
        }
    }
}

/// Presentation metadata for one sheet. Widths are computed per sheet from
/// that sheet's own rows, never shared across the workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStyle {
    pub column_widths: Vec<f64>,
    pub header: HeaderStyle,
}

/// One named unit of the output workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub style: Option<SheetStyle>,
}

impl Sheet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// The assembled output artifact: an ordered, non-empty sequence of
/// uniquely named sheets.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookModel {
    pub sheets: Vec<Sheet>,
}

//==============================================================================
// Conversion summary
//==============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SheetSummary {
    pub name: String,
    pub rows: usize,
}

/// Returned to the caller on success for display purposes.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub sheets: Vec<SheetSummary>,
    /// True when the requested partition column was missing and the
    /// single-sheet fallback was taken.
    pub partition_fallback: bool,
}

impl ConversionSummary {
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn total_rows(&self) -> usize {
        self.sheets.iter().map(|s| s.rows).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_field_empty() {
        assert_eq!(CellValue::from_field(""), CellValue::Empty);
    }

    #[test]
    fn test_from_field_integer() {
        assert_eq!(CellValue::from_field("42"), CellValue::Number(42.0));
    }

    #[test]
    fn test_from_field_negative_decimal() {
        assert_eq!(CellValue::from_field("-3.5"), CellValue::Number(-3.5));
    }

    #[test]
    fn test_from_field_keeps_trailing_zero_as_text() {
        // "1.50" formats back as "1.5", so treating it as a number would
        // change the displayed value
        assert_eq!(
            CellValue::from_field("1.50"),
            CellValue::Text("1.50".to_string())
        );
    }

    #[test]
    fn test_from_field_leading_zero_as_text() {
        assert_eq!(
            CellValue::from_field("007"),
            CellValue::Text("007".to_string())
        );
    }

    #[test]
    fn test_from_field_nan_and_inf_are_text() {
        assert_eq!(
            CellValue::from_field("NaN"),
            CellValue::Text("NaN".to_string())
        );
        assert_eq!(
            CellValue::from_field("inf"),
            CellValue::Text("inf".to_string())
        );
    }

    #[test]
    fn test_display_roundtrip() {
        for field in ["Alice", "42", "-3.5", "1.50", ""] {
            assert_eq!(CellValue::from_field(field).display(), field);
        }
    }

    #[test]
    fn test_display_len_counts_chars() {
        assert_eq!(CellValue::Text("héllo".to_string()).display_len(), 5);
        assert_eq!(CellValue::Number(1234.0).display_len(), 4);
        assert_eq!(CellValue::Empty.display_len(), 0);
    }

    #[test]
    fn test_table_column_index() {
        let table = Table::new(
            vec!["Name".to_string(), "Dept".to_string()],
            vec![],
        );
        assert_eq!(table.column_index("Dept"), Some(1));
        assert_eq!(table.column_index("Missing"), None);
    }

    #[test]
    fn test_summary_totals() {
        let summary = ConversionSummary {
            sheets: vec![
                SheetSummary {
                    name: "Eng".to_string(),
                    rows: 2,
                },
                SheetSummary {
                    name: "Sales".to_string(),
                    rows: 1,
                },
            ],
            partition_fallback: false,
        };
        assert_eq!(summary.sheet_count(), 2);
        assert_eq!(summary.total_rows(), 3);
    }
}
