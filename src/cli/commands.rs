use crate::convert as pipeline;
use crate::error::ConvertResult;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the convert command
pub fn convert(
    input: PathBuf,
    output: Option<PathBuf>,
    split_by: Option<String>,
    delimiter: u8,
    verbose: bool,
) -> ConvertResult<()> {
    let output = output.unwrap_or_else(|| default_output_path(&input));

    println!("{}", "📊 Sheetsplit - CSV to Excel".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}", output.display());
    if let Some(ref column) = split_by {
        println!("   Split by: {}", column.bright_yellow().bold());
    }
    println!();

    if verbose {
        println!("{}", "📖 Converting...".cyan());
    }

    let summary = pipeline::convert(&input, &output, split_by.as_deref(), delimiter)?;

    if summary.partition_fallback {
        println!(
            "{}",
            format!(
                "⚠️  Column '{}' not found in header - wrote a single sheet instead",
                split_by.as_deref().unwrap_or_default()
            )
            .yellow()
        );
        println!();
    }

    println!("{}", "✅ Conversion Complete!".bold().green());
    println!(
        "   {} sheet(s), {} row(s) total",
        summary.sheet_count(),
        summary.total_rows()
    );
    for sheet in &summary.sheets {
        println!(
            "   📄 {} ({} rows)",
            sheet.name.bright_blue().bold(),
            sheet.rows
        );
    }
    println!("\n   Excel file: {}", output.display());

    Ok(())
}

/// Derive the output path when the caller gives none: `report.csv` becomes
/// `report_formatted.xlsx`; inputs without a `.csv` suffix get the suffix
/// appended to the whole file name.
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(".csv").unwrap_or(&name);
    input.with_file_name(format!("{}_formatted.xlsx", stem))
}
