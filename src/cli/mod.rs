//! CLI command handlers

pub mod commands;

pub use commands::{convert, default_output_path};
