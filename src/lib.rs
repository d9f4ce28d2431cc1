//! Colored console logging with a persisted error log.
//!
//! ```no_run
//! let logger = acronix_log::Builder::new().with_log_dir("logs").build()?;
//! logger.log_info("ready");
//! logger.log_warn(serde_json::json!({ "code": 42 }));
//! logger.log_error("disk full");
//! # Ok::<(), eyre::Report>(())
//! ```

pub mod config;
pub mod logging;

pub use config::{ConfigManager, LocalConfigManager};
pub use logging::{ensure_log_dir, Builder, LogFacade, Message, Severity};
