use std::{fmt::Display, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use eyre::Context;

use acronix_log::{
    config::{ConfigManager, LocalConfigManager},
    ensure_log_dir, Builder, Message, Severity,
};

#[derive(Args, Debug)]
pub struct EmitArgs {
    #[arg(help = "The message to log.")]
    pub message: String,

    #[arg(
        long,
        help = "Parse the message as JSON and log it as a structured value."
    )]
    pub json: bool,
}

impl EmitArgs {
    fn message(&self) -> eyre::Result<Message> {
        if !self.json {
            return Ok(Message::from(self.message.as_str()));
        }

        let value: serde_json::Value = serde_json::from_str(&self.message)
            .with_context(|| format!("Failed parsing {:?} as JSON", self.message))?;
        Ok(Message::from(value))
    }
}

#[derive(Subcommand, Debug)]
pub enum LogCmd {
    /// Create the log directory if it doesn't exist yet.
    Init,

    /// Log an error to the console and append it to error.log.
    Error(EmitArgs),

    /// Log a warning to the console.
    Warn(EmitArgs),

    /// Log an informational message to the console.
    Info(EmitArgs),
}

impl Display for LogCmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogCmd::Init => write!(f, "init"),
            LogCmd::Error(_) => write!(f, "error"),
            LogCmd::Warn(_) => write!(f, "warn"),
            LogCmd::Info(_) => write!(f, "info"),
        }
    }
}

#[derive(Parser)]
#[command(version, long_version = "")]
#[command(about = "Write colored log lines to the console and keep errors in logs/error.log.", long_about = None, disable_help_subcommand = true)]
pub struct AcronixLog {
    #[arg(
        global = true,
        long,
        help = "Directory holding error.log. Defaults to ./logs.",
        display_order = 0
    )]
    pub log_dir: Option<PathBuf>,

    #[arg(
        global = true,
        long,
        help = "Disable ANSI colors on the console.",
        display_order = 999
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub cmd: LogCmd,
}

impl AcronixLog {
    fn config(&self) -> LocalConfigManager {
        match &self.log_dir {
            Some(dir) => LocalConfigManager::new().log_dir(dir),
            None => LocalConfigManager::new(),
        }
    }

    pub fn run(self) -> eyre::Result<()> {
        let config = self.config();

        let (severity, args) = match &self.cmd {
            LogCmd::Init => {
                let log_dir = config.get_log_dir();
                if ensure_log_dir(&log_dir)? {
                    println!("created {}", log_dir.display());
                }
                return Ok(());
            }
            LogCmd::Error(args) => (Severity::Error, args),
            LogCmd::Warn(args) => (Severity::Warn, args),
            LogCmd::Info(args) => (Severity::Info, args),
        };

        let message = args
            .message()
            .with_context(|| format!("Failed running command {}", &self.cmd))?;

        let mut builder = Builder::from_config(&config);
        if self.no_color {
            builder = builder.with_ansi(false);
        }

        let logger = builder.build()?;
        logger.emit(severity, message);

        Ok(())
    }
}
