use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use confdata_core::DateAnchor;

/// Validate typed configuration values.
///
/// Each ENTRY is written `KEY:TYPE=VALUE`, where TYPE is one of
/// STR, INT, POSINT, FLOAT, POSFLOAT, FILE, EXEC, FOLDER, DATE.
/// Exits 0 when every entry is valid, 1 otherwise.
#[derive(Parser, Debug)]
#[command(name = "confdata-check", version, about)]
pub struct Cli {
    /// Entries to validate, as `KEY:TYPE=VALUE`.
    #[arg(value_name = "ENTRY")]
    pub entries: Vec<String>,

    /// JSON file holding an array of `{"key", "type", "value"}` objects.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Also print the native value of numbers and dates.
    #[arg(short, long)]
    pub convert: bool,

    /// Anchor of converted dates.
    #[arg(long, value_enum, default_value_t = DateAnchor::Local)]
    pub anchor: DateAnchor,

    /// Report format.
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,

    /// Maximum number of checks in flight.
    #[arg(long, value_name = "N")]
    pub max_concurrency: Option<usize>,

    /// Log filter expression.
    #[arg(long, default_value = "warn", env = "CONFDATA_LOG")]
    pub log_level: String,

    /// Log output format (text|json).
    #[arg(long, default_value = "text", env = "CONFDATA_LOG_FORMAT")]
    pub log_format: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
