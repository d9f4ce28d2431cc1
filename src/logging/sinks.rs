use std::{
    fs::File,
    io::{LineWriter, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use eyre::Context;

use super::{LogFormatter, LogRecord, LogSink, Severity};

/// Append-only file sink. Only records at or above `threshold` are written.
pub struct FileSink {
    file: Mutex<LineWriter<File>>,
    file_path: PathBuf,
    formatter: Box<dyn LogFormatter>,
    threshold: Severity,
}

impl FileSink {
    pub fn new(
        path: impl AsRef<Path>,
        threshold: Severity,
        formatter: Box<dyn LogFormatter>,
    ) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed opening or creating log file {}", path.display()))?;

        Ok(Self {
            file: Mutex::new(LineWriter::new(file)),
            file_path: path.to_path_buf(),
            formatter,
            threshold,
        })
    }
}

impl LogSink for FileSink {
    fn accepts(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    fn write_log(&self, record: &LogRecord) -> eyre::Result<()> {
        let mut file = self.file.lock().map_err(|e| eyre::eyre!(e.to_string()))?;
        writeln!(file, "{}", self.formatter.format(record))?;
        file.flush()
            .with_context(|| format!("Can't flush {}", self.file_path.display()))
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Console sink. Writes to stdout unless another writer is injected.
pub struct ConsoleSink {
    handle: Mutex<Box<dyn Write + Send>>,
    formatter: Box<dyn LogFormatter>,
}

impl ConsoleSink {
    pub fn new(formatter: Box<dyn LogFormatter>) -> Self {
        Self::with_writer(Box::new(std::io::stdout()), formatter)
    }

    pub fn with_writer(writer: Box<dyn Write + Send>, formatter: Box<dyn LogFormatter>) -> Self {
        Self {
            handle: Mutex::new(writer),
            formatter,
        }
    }
}

impl LogSink for ConsoleSink {
    fn accepts(&self, _severity: Severity) -> bool {
        true
    }

    fn write_log(&self, record: &LogRecord) -> eyre::Result<()> {
        let mut writer = self.handle.lock().map_err(|e| eyre::eyre!(e.to_string()))?;

        writeln!(writer, "{}", self.formatter.format(record))?;
        writer.flush().context("Can't flush console")
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.handle.lock() {
            let _ = writer.flush();
        }
    }
}

pub struct NullSink {}

impl NullSink {
    pub fn new() -> Self {
        Self {}
    }
}

impl LogSink for NullSink {
    fn accepts(&self, _severity: Severity) -> bool {
        false
    }

    fn write_log(&self, _record: &LogRecord) -> eyre::Result<()> {
        Ok(())
    }

    fn flush(&self) {}
}
