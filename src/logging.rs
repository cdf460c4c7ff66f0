//! Logger setup for binaries and tests that want to see what the tree is doing.
//!
//! The library itself only talks to the `log` facade: rotations and fix-up
//! cases go out at `trace`, insert/delete outcomes at `debug`, and broken
//! caller contracts at `warn`.

use std::fs::File;
use std::path::PathBuf;
use std::fmt;

use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode, WriteLogger};

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for the terminal logger.
    pub terminal_level: LevelFilter,
    /// Level for the log file. Only used when `file_path` is set.
    pub file_level: LevelFilter,
    /// File to log to, created (or truncated) at initialization.
    pub file_path: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            terminal_level: LevelFilter::Warn,
            file_level: LevelFilter::Debug,
            file_path: None,
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub enum LoggingError {
    CreateFile(std::io::Error),
    /// A global logger was already installed (by us or by someone else).
    AlreadyInitialized,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::CreateFile(e) => write!(f, "could not create log file: {e}"),
            LoggingError::AlreadyInitialized => write!(f, "a logger is already installed"),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::CreateFile(e) => Some(e),
            LoggingError::AlreadyInitialized => None,
        }
    }
}

/// Installs a terminal logger, plus a file logger if `config.file_path` is set.
///
/// Can only succeed once per process; later calls return
/// [`LoggingError::AlreadyInitialized`].
pub fn initialize_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(config.terminal_level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
    ];

    if let Some(path) = &config.file_path {
        let file = File::create(path).map_err(LoggingError::CreateFile)?;
        loggers.push(WriteLogger::new(config.file_level, Config::default(), file));
    }

    CombinedLogger::init(loggers).map_err(|_| LoggingError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    // the global logger can only be set once, so everything lives in one test
    #[test]
    fn init_once_then_refuse() {
        let path = std::env::temp_dir().join(format!("redblack-log-{}.log", std::process::id()));
        let config = LogConfig {
            terminal_level: LevelFilter::Off,
            file_level: LevelFilter::Debug,
            file_path: Some(path.clone()),
        };

        initialize_logging(&config).unwrap();
        debug!("hello from the logging test");

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("hello from the logging test"));

        assert!(matches!(initialize_logging(&LogConfig::default()), Err(LoggingError::AlreadyInitialized)));

        let _ = std::fs::remove_file(&path);
    }
}
