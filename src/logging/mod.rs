mod dir;
mod facade;
mod formatters;
mod logger;
mod record;
mod sinks;

pub use dir::{ensure_log_dir, ERROR_LOG_FILE, GITIGNORE_CONTENT, GITIGNORE_FILE};
pub use facade::LogFacade;
pub use formatters::{ConsoleFormatter, PlainFormatter};
pub use logger::{Builder, Config};
pub use record::{LogRecord, Message, Severity};
pub use sinks::{ConsoleSink, FileSink, NullSink};

pub trait LogFormatter: Sync + Send {
    fn format(&self, record: &LogRecord) -> String;
}

pub trait LogSink: Sync + Send {
    fn accepts(&self, severity: Severity) -> bool;
    fn write_log(&self, record: &LogRecord) -> eyre::Result<()>;
    fn flush(&self);
}
