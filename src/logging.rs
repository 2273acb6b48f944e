//! Tracing subscriber setup for the harvester binary.
//!
//! Diagnostics always go to stderr. An append-only log file can be attached;
//! its lines read `HH:MM:SS - Level: message`, e.g.
//! `14:02:11 - Info: set code is not in the set-code table collector_number="ZZZ001"`.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Errors initialising logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        /// Path of the log file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Log line format of the append-only log file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLineFormat;

impl<S, N> FormatEvent<S, N> for LogLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now().format("%H:%M:%S");
        write!(writer, "{now} - {}: ", level_label(*event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Returns the label written for `level` in the log file.
#[must_use]
pub fn level_label(level: Level) -> &'static str {
    match level {
        Level::TRACE => "Trace",
        Level::DEBUG => "Debug",
        Level::INFO => "Info",
        Level::WARN => "Warn",
        Level::ERROR => "Error",
    }
}

/// Builds a layer appending formatted lines to `path`.
///
/// # Errors
///
/// Returns [`LoggingError::OpenLogFile`] if the file cannot be opened.
pub fn file_layer<S>(path: &Path) -> Result<impl Layer<S>, LoggingError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .event_format(LogLineFormat)
        .with_writer(Mutex::new(file)))
}

/// Returns the default filter directive for the CLI verbosity flags.
///
/// Priority: `RUST_LOG` (applied by [`init`]) > quiet > verbose > info.
#[must_use]
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Installs the global subscriber: stderr output, plus the log file if given.
///
/// # Errors
///
/// Returns [`LoggingError`] if the log file cannot be opened or a subscriber
/// is already installed.
pub fn init(default_level: &str, log_file: Option<&Path>) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file = log_file.map(file_layer::<Registry>).transpose()?;

    // Filter applies to both outputs; the file layer sits next to the registry.
    tracing_subscriber::registry()
        .with(file)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}
