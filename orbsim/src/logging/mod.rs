use std::fmt::Write as FmtWrite;
use std::io::Write;

use anyhow::Result;
use flexi_logger::{DeferredNow, Logger, LoggerHandle, Record};
use textwrap::{termwidth, Options};

/// Setup console logging for the application.
/// Keep the returned handle alive until exit so output is flushed.
pub fn setup() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")?
        .format(console_format)
        .start()?;

    log::info!("Adjust the log level by setting RUST_LOG. By default RUST_LOG=info");

    Ok(handle)
}

/// Header with level, time and source, then the message wrapped to the
/// terminal width under a continuation bar.
pub fn console_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let size = termwidth().min(74);
    let wrap_options = Options::new(size)
        .initial_indent("┏ ")
        .subsequent_indent("┃ ");

    let mut full_line = String::new();
    writeln!(
        full_line,
        "{} [{}] [{}:{}]",
        record.level(),
        now.now().format("%H:%M:%S%.6f"),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
    )
    .map_err(std::io::Error::other)?;
    write!(full_line, "{}", record.args()).map_err(std::io::Error::other)?;

    writeln!(w, "{}", textwrap::fill(&full_line, wrap_options))
}
