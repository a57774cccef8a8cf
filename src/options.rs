//! Command-line options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::distance::Rounding;

/// Build a nearest-neighbor tour for a TSPLIB-style coordinate file.
#[derive(Debug, Clone, Parser)]
#[command(name = "nn-tour", version)]
pub struct Options {
    /// Path to the instance file
    pub file: PathBuf,

    /// ID of the city the tour starts and ends at
    #[arg(short, long, default_value_t = 1)]
    pub start: usize,

    /// Edge weight rounding policy
    #[arg(short, long, value_enum, default_value_t = RoundingArg::Exact)]
    pub rounding: RoundingArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log verbosity; `RUST_LOG` takes precedence when set
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Prefix log lines with a millisecond timestamp
    #[arg(long)]
    pub log_timestamp: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RoundingArg {
    Exact,
    Truncate,
    Nearest,
}

impl From<RoundingArg> for Rounding {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::Exact => Rounding::Exact,
            RoundingArg::Truncate => Rounding::Truncate,
            RoundingArg::Nearest => Rounding::Nearest,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// `EDGE` lines followed by the total
    Text,
    /// The tour serialized as JSON
    Json,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}
