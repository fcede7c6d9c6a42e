use clap::Parser;
use sheetsplit::cli;
use sheetsplit::error::ConvertResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetsplit")]
#[command(about = "Convert CSV files to styled Excel workbooks, one sheet per group.")]
#[command(long_about = "Sheetsplit - CSV to styled Excel (.xlsx)

Reads a delimited text file and writes a formatted workbook: bold header
row, auto-sized columns, and optionally one sheet per distinct value of a
chosen column.

EXAMPLES:
  sheetsplit sales.csv                          # sales_formatted.xlsx, one sheet
  sheetsplit sales.csv report.xlsx              # explicit output path
  sheetsplit sales.csv --split-by Region        # one sheet per region
  sheetsplit data.tsv out.xlsx -d '\\t'          # tab-delimited input

Sheet names are derived from the split column's values, sanitized for
Excel's rules (31 chars, no * : / \\ ? [ ]) and deduplicated.")]
#[command(version)]
struct Cli {
    /// Path to the delimited input file
    input: PathBuf,

    /// Output .xlsx path (default: input with `_formatted.xlsx` suffix)
    output: Option<PathBuf>,

    /// Column whose distinct values become separate sheets
    #[arg(short, long)]
    split_by: Option<String>,

    /// Input field delimiter (single ASCII character, or \t)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Show verbose progress
    #[arg(short, long)]
    verbose: bool,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" => Ok(b'\t'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err("delimiter must be a single ASCII character (or \\t)".to_string()),
    }
}

fn main() -> ConvertResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    cli::convert(
        cli.input,
        cli.output,
        cli.split_by,
        cli.delimiter,
        cli.verbose,
    )
}
