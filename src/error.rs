use std::path::PathBuf;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Failures while reading and parsing the delimited input.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("input file not found: {0}")]
    NotFound(PathBuf),

    #[error("input file is empty (no header row): {0}")]
    Empty(PathBuf),

    #[error("malformed input at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("IO error while reading input: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while persisting the workbook.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("permission denied writing output: {0}")]
    PermissionDenied(PathBuf),

    #[error("output file is locked or not writable (open elsewhere?): {0}")]
    TargetLocked(PathBuf),

    #[error("IO error while writing output: {0}")]
    Io(#[from] std::io::Error),

    #[error("XLSX serialization error: {0}")]
    Xlsx(String),
}

/// Top-level pipeline error: a conversion fails either on the read side or
/// the write side, never both.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Write(#[from] WriteError),
}
