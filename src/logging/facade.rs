use log::{LevelFilter, Log};

use eyre::Context;

use super::{logger::Config, LogRecord, LogSink, Message, Severity};

/// Routes severity-tagged messages to its sinks: the console sees
/// everything, the error log only `error` records.
pub struct LogFacade {
    sinks: Vec<Box<dyn LogSink>>,
    config: Config,
}

impl LogFacade {
    pub fn new(sinks: Vec<Box<dyn LogSink>>, config: Config) -> Self {
        Self { sinks, config }
    }

    pub fn log_error(&self, message: impl Into<Message>) {
        self.emit(Severity::Error, message)
    }

    pub fn log_warn(&self, message: impl Into<Message>) {
        self.emit(Severity::Warn, message)
    }

    pub fn log_info(&self, message: impl Into<Message>) {
        self.emit(Severity::Info, message)
    }

    /// Writes one record to every sink accepting `severity`. Sink failures
    /// are reported on stderr and dropped.
    pub fn emit(&self, severity: Severity, message: impl Into<Message>) {
        if !self.config.enabled {
            return;
        }

        let record = LogRecord::new(severity, &message.into(), &self.config.datetime_format);

        for sink in self.sinks.iter().filter(|s| s.accepts(severity)) {
            if let Err(err) = sink.write_log(&record) {
                eprintln!("acronix-log: failed writing {} record: {:#}", severity, err);
            }
        }
    }

    /// Installs the facade as the global `log` logger.
    pub fn init(self) -> eyre::Result<()> {
        log::set_max_level(LevelFilter::Info);
        log::set_boxed_logger(Box::new(self)).context("Failed registering boxed logger")?;

        Ok(())
    }
}

impl Log for LogFacade {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.config.enabled && Severity::from_level(metadata.level()).is_some()
    }

    fn log(&self, record: &log::Record) {
        if let Some(severity) = Severity::from_level(record.level()) {
            self.emit(severity, record.args().to_string());
        }
    }

    fn flush(&self) {
        for sink in &self.sinks {
            sink.flush();
        }
    }
}
