use yansi::{Color, Condition, Paint, Style};

use super::{logger::Config, LogFormatter, LogRecord, Severity};

fn format_line(record: &LogRecord) -> String {
    format!(
        "[{}] {} :: {}",
        record.timestamp, record.severity, record.message
    )
}

/// Plain `[timestamp] severity :: message` lines, used for the error file.
/// Line breaks inside the message are escaped so every record stays on a
/// single line.
pub struct PlainFormatter {}

impl PlainFormatter {
    pub fn new() -> Self {
        Self {}
    }
}

impl LogFormatter for PlainFormatter {
    fn format(&self, record: &LogRecord) -> String {
        if !record.message.contains(['\n', '\r']) {
            return format_line(record);
        }

        let message = record.message.replace('\r', "\\r").replace('\n', "\\n");
        format_line(&LogRecord {
            message,
            ..record.clone()
        })
    }
}

/// Same `[timestamp] severity :: message` layout, with the whole line colored
/// by severity.
pub struct ConsoleFormatter {
    config: Config,
}

impl ConsoleFormatter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Error => Color::Red.foreground(),
            Severity::Warn => Color::Yellow.foreground(),
            Severity::Info => Color::Green.foreground(),
        }
    }
}

impl LogFormatter for ConsoleFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let line = format_line(record);
        if !self.config.use_ansi {
            return line;
        }

        line.paint(self.style(record.severity))
            .whenever(Condition::ALWAYS)
            .to_string()
    }
}
