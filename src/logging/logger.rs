use std::{
    io::{IsTerminal, Write},
    path::PathBuf,
};

use chrono::format::{Item, StrftimeItems};
use eyre::eyre;

use crate::config::ConfigManager;

use super::{
    dir::{ensure_log_dir, ERROR_LOG_FILE},
    formatters::{ConsoleFormatter, PlainFormatter},
    sinks::{ConsoleSink, FileSink, NullSink},
    LogFacade, LogSink, Severity,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub enabled: bool,
    pub datetime_format: String,
    pub use_ansi: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            enabled: true,
            datetime_format: "%Y-%m-%d %H:%M:%S".to_string(),
            use_ansi: std::io::stdout().is_terminal(),
        }
    }
}

pub struct Builder {
    log_dir: PathBuf,
    error_log_path: Option<PathBuf>,
    console: bool,
    console_writer: Option<Box<dyn Write + Send>>,
    config: Config,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            error_log_path: None,
            console: true,
            console_writer: None,
            config: Config::new(),
        }
    }

    pub fn from_config(config: &impl ConfigManager) -> Self {
        Self {
            error_log_path: Some(config.get_error_log_path()),
            ..Self::new().with_log_dir(config.get_log_dir())
        }
    }

    /// Also resets the error log to `<log_dir>/error.log`.
    pub fn with_log_dir(self, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            error_log_path: None,
            ..self
        }
    }

    pub fn with_console(self, console: bool) -> Self {
        Self { console, ..self }
    }

    /// Sends console output to `writer` instead of stdout.
    pub fn with_console_writer(self, writer: impl Write + Send + 'static) -> Self {
        Self {
            console_writer: Some(Box::new(writer)),
            ..self
        }
    }

    pub fn with_ansi(mut self, use_ansi: bool) -> Self {
        self.config.use_ansi = use_ansi;
        self
    }

    pub fn with_datetime_format(mut self, datetime_format: impl Into<String>) -> Self {
        self.config.datetime_format = datetime_format.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    pub fn build(self) -> eyre::Result<LogFacade> {
        let datetime_format = &self.config.datetime_format;
        if StrftimeItems::new(datetime_format).any(|item| matches!(item, Item::Error)) {
            return Err(eyre!("Invalid datetime format {:?}", datetime_format));
        }

        ensure_log_dir(&self.log_dir)?;

        let error_log_path = self
            .error_log_path
            .unwrap_or_else(|| self.log_dir.join(ERROR_LOG_FILE));
        let file_sink = FileSink::new(
            error_log_path,
            Severity::Error,
            Box::new(PlainFormatter::new()),
        )?;

        let console_sink: Box<dyn LogSink> = match (self.console, self.console_writer) {
            (false, _) => Box::new(NullSink::new()),
            (true, Some(writer)) => Box::new(ConsoleSink::with_writer(
                writer,
                Box::new(ConsoleFormatter::new(self.config.clone())),
            )),
            (true, None) => Box::new(ConsoleSink::new(Box::new(ConsoleFormatter::new(
                self.config.clone(),
            )))),
        };

        Ok(LogFacade::new(
            vec![console_sink, Box::new(file_sink)],
            self.config,
        ))
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
