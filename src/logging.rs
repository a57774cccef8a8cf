//! Logger setup for the command-line tool.

use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Target};
use log::Level;

use crate::error::{Error, Result};
use crate::options::Options;

/// Installs an `env_logger` writing to stderr.
///
/// The level comes from `--log-level`; a `RUST_LOG` environment variable
/// overrides it.
pub fn init_logger(options: &Options) -> Result<()> {
    let log_timestamp = options.log_timestamp;

    let mut builder = Builder::new();
    builder
        .filter_level(options.log_level.to_filter())
        .parse_default_env()
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        });

    builder
        .try_init()
        .map_err(|e| Error::Logger(e.to_string()))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
