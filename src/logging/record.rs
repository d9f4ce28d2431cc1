use std::{borrow::Cow, fmt::Display};

use serde::Serialize;
use serde_json::Value;

/// Importance of a record. Ordered so that `Info < Warn < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
        }
    }

    pub fn from_level(level: log::Level) -> Option<Self> {
        match level {
            log::Level::Error => Some(Severity::Error),
            log::Level::Warn => Some(Severity::Warn),
            log::Level::Info => Some(Severity::Info),
            log::Level::Debug | log::Level::Trace => None,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What application code hands to the facade: either plain text, which is
/// written verbatim, or a structured value rendered as compact JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    Structured(Value),
}

impl Message {
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Message::from)
    }

    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Message::Text(text) => Cow::Borrowed(text),
            // Serializing a Value only writes into a String, which can't fail.
            Message::Structured(value) => Cow::Owned(value.to_string()),
        }
    }
}

impl From<&str> for Message {
    fn from(value: &str) -> Self {
        Message::Text(value.to_string())
    }
}

impl From<String> for Message {
    fn from(value: String) -> Self {
        Message::Text(value)
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Message::Text(text),
            other => Message::Structured(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub timestamp: String,
}

impl LogRecord {
    pub fn new(severity: Severity, message: &Message, datetime_format: &str) -> Self {
        Self {
            severity,
            message: message.render().into_owned(),
            timestamp: chrono::Local::now().format(datetime_format).to_string(),
        }
    }
}
