use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber, error};
use tracing_subscriber::{
    EnvFilter,
    Layer, // for .with_filter() on the stdout layer
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "info,money_ui=debug,money_core=debug";

/// Startup logging settings, usually taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct LoggingOptions {
    /// EnvFilter directive. Falls back to `RUST_LOG`, then [`DEFAULT_FILTER`].
    pub level: Option<String>,
    /// Append log records to this file as well.
    pub file: Option<PathBuf>,
    /// Suppress stdout output.
    pub quiet: bool,
}

// --- Formatter ---

struct LocalTimeFormat;

impl<S, N> FormatEvent<S, N> for LocalTimeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let colour = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        if ansi {
            write!(writer, "{colour}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{:>5} ", meta.level())?;
        }

        if ansi {
            write!(writer, "\x1b[36m{}\x1b[0m ", meta.target())?;
        } else {
            write!(writer, "{} ", meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

/// Writer target that can be pointed at a file after the subscriber is installed.
/// Records are dropped while no file is set.
#[derive(Clone)]
struct LogFile(Arc<Mutex<Option<File>>>);

impl LogFile {
    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct LogFileWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for LogFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(self.lock())
    }
}

static LOG_FILE: OnceLock<LogFile> = OnceLock::new();

fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| anyhow!("invalid log level '{directive}': {e}"))
}

fn stdout_gate(enabled: bool) -> EnvFilter {
    // The global filter stays the ceiling; the gate only switches stdout on or off.
    EnvFilter::new(if enabled { "trace" } else { "off" })
}

// --- Public API ---

/// Installs the global subscriber. Call once at startup.
///
/// Stdout output is coloured only when attached to a terminal. File output
/// starts when `options.file` is set or [`enable_file_logging`] is called.
/// A bad level directive or unwritable log file is reported after the
/// subscriber is up, so the error itself gets logged.
pub fn init_logging(options: &LoggingOptions) -> Result<()> {
    let (initial_filter, level_error) = match options.level.as_deref() {
        Some(directive) => match parse_filter(directive) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
        },
        None => (
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
            None,
        ),
    };

    let log_file = LOG_FILE.get_or_init(|| LogFile(Arc::new(Mutex::new(None))));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate(!options.quiet));

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(false)
        .with_writer(log_file.clone());

    tracing_subscriber::registry()
        .with(initial_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    if let Some(error) = level_error {
        return Err(error);
    }
    if let Some(path) = &options.file {
        enable_file_logging(path)?;
    }
    Ok(())
}

/// Starts appending log records to `path`, replacing any open log file.
/// The parent directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    match LOG_FILE.get() {
        Some(slot) => {
            *slot.lock() = Some(file);
            Ok(())
        }
        None => bail!("logging not yet initialized"),
    }
}

/// Logs the failure of a detached task.
pub fn log_task_error(
    task_name: &'static str,
    result: Result<()>,
) {
    if let Err(error) = result {
        error!(task = task_name, ?error, "background task failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_levels_and_directives_parse() {
        assert!(parse_filter("warn").is_ok());
        assert!(parse_filter("info,money_ui=trace").is_ok());
    }

    #[test]
    fn garbage_level_is_rejected() {
        assert!(parse_filter("money_ui=loud").is_err());
    }

    #[test]
    fn failed_task_result_is_swallowed() {
        log_task_error("test", Err(anyhow!("boom")));
        log_task_error("test", Ok(()));
    }
}
