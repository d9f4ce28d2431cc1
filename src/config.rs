use std::path::PathBuf;

use crate::logging::ERROR_LOG_FILE;

pub trait ConfigManager: Sized + Clone + Send + Sync {
    fn get_log_dir(&self) -> PathBuf;

    fn get_error_log_path(&self) -> PathBuf {
        self.get_log_dir().join(ERROR_LOG_FILE)
    }
}

/// Resolves the log directory relative to a base directory, the current
/// working directory unless told otherwise.
#[derive(Default, Clone, Debug)]
pub struct LocalConfigManager {
    base_dir: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

impl LocalConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
            ..Self::default()
        }
    }

    pub fn log_dir(self, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: Some(log_dir.into()),
            ..self
        }
    }
}

impl ConfigManager for LocalConfigManager {
    fn get_log_dir(&self) -> PathBuf {
        let log_dir = self
            .log_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("logs"));

        match &self.base_dir {
            Some(base) => base.join(log_dir),
            None => log_dir,
        }
    }
}
