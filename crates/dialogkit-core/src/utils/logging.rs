//! Logging setup
//!
//! Call sites use the `log` macros. [`LoggingConfig::init`] installs a
//! `tracing-subscriber` registry once per process, which picks those
//! records up through its `log` bridge.

use crate::error::LoggingError;
use crate::utils::color::should_colorize_stderr;
use clap::Args;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::{Identity, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry, fmt, reload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(LoggingError::InvalidLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command line flags controlling the log level
#[derive(Args, Debug, Clone, Default)]
pub struct LoggingArgs {
    /// Print lots of debugging statements. Sets logging level to DEBUG
    #[arg(long, global = true)]
    pub debug: bool,

    /// Be verbose. Sets logging level to INFO
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl LoggingArgs {
    /// Level requested on the command line, `None` when no flag was given
    pub fn requested_level(&self) -> Option<LogLevel> {
        if self.debug {
            Some(LogLevel::Debug)
        } else if self.verbose {
            Some(LogLevel::Info)
        } else {
            None
        }
    }

    pub fn level(&self) -> LogLevel {
        self.requested_level().unwrap_or_default()
    }
}

/// Logging setup for one process
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    level: LogLevel,
    colored: bool,
    log_file: Option<(PathBuf, LogLevel)>,
}

impl LoggingConfig {
    /// Console logging at `level`, colored when stderr is a terminal
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            colored: should_colorize_stderr(),
            log_file: None,
        }
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Also append log lines at `level` or above to `logfile`
    pub fn with_file_logging(mut self, level: LogLevel, logfile: Option<PathBuf>) -> Self {
        self.log_file = logfile.map(|path| (path, level));
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_ref().map(|(path, _)| path.as_path())
    }

    /// Install the subscriber. Fails if logging was already set up.
    pub fn init(&self) -> Result<(), LoggingError> {
        let installed = install(self.level, self.colored)?;
        match &self.log_file {
            Some((path, level)) => attach_file(installed, *level, path),
            None => Ok(()),
        }
    }
}

type FileSlot = Box<dyn Layer<Registry> + Send + Sync>;

/// Handle to the file output of the installed subscriber
struct Installed {
    file_slot: reload::Handle<FileSlot, Registry>,
}

static INSTALLED: OnceLock<Installed> = OnceLock::new();

fn install(level: LogLevel, colored: bool) -> Result<&'static Installed, LoggingError> {
    // The file slot starts empty and is filled by `attach_file`
    let (file_slot, handle) = reload::Layer::new(Box::new(Identity::new()) as FileSlot);
    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(colored)
        .with_target(true)
        .with_filter(level.to_level_filter());

    tracing_subscriber::registry()
        .with(file_slot)
        .with(console)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized {
            message: e.to_string(),
        })?;

    Ok(INSTALLED.get_or_init(|| Installed { file_slot: handle }))
}

fn attach_file(installed: &Installed, level: LogLevel, path: &Path) -> Result<(), LoggingError> {
    let Some(max_level) = level.to_level_filter().into_level() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::LogFile {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

    let layer = fmt::layer::<Registry>()
        .with_writer(Mutex::new(file).with_max_level(max_level))
        .with_ansi(false)
        .with_target(true);
    installed
        .file_slot
        .reload(Box::new(layer) as FileSlot)
        .map_err(|e| LoggingError::Reload {
            message: e.to_string(),
        })
}

/// Colored console logging at `level`
pub fn configure_colored_logging(level: LogLevel) -> Result<(), LoggingError> {
    LoggingConfig::new(level).init()
}

/// Copy every log line at `level` or above into `logfile`.
///
/// Adds the file to the subscriber installed by [`configure_colored_logging`]
/// or [`LoggingConfig::init`], replacing a previously attached file. Without
/// an installed subscriber, console logging at `level` is set up as well.
/// `None` leaves logging untouched.
pub fn configure_file_logging(
    level: LogLevel,
    logfile: Option<PathBuf>,
) -> Result<(), LoggingError> {
    let Some(path) = logfile else {
        return Ok(());
    };
    match INSTALLED.get() {
        Some(installed) => attach_file(installed, level, &path),
        None => LoggingConfig::new(level)
            .with_file_logging(level, Some(path))
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_levels() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!(" Warning ".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_ordering_and_filters() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert_eq!(LogLevel::Warning.to_level_filter(), LevelFilter::WARN);
        assert_eq!(LogLevel::default(), LogLevel::Warning);
    }

    #[test]
    fn test_logging_args_levels() {
        let args = LoggingArgs::default();
        assert_eq!(args.requested_level(), None);
        assert_eq!(args.level(), LogLevel::Warning);

        let args = LoggingArgs {
            debug: false,
            verbose: true,
        };
        assert_eq!(args.level(), LogLevel::Info);

        let args = LoggingArgs {
            debug: true,
            verbose: true,
        };
        assert_eq!(args.level(), LogLevel::Debug);
    }

    #[test]
    fn test_config_builder() {
        let config = LoggingConfig::new(LogLevel::Info)
            .with_color(false)
            .with_file_logging(LogLevel::Debug, Some(PathBuf::from("bot.log")));
        assert_eq!(config.level(), LogLevel::Info);
        assert_eq!(config.log_file(), Some(Path::new("bot.log")));

        let config = LoggingConfig::new(LogLevel::Info).with_file_logging(LogLevel::Debug, None);
        assert!(config.log_file().is_none());
    }

    #[test]
    fn test_file_logging_without_path_is_a_no_op() {
        configure_file_logging(LogLevel::Debug, None).expect("nothing to set up");
    }

    // The only test in this crate that installs the global subscriber
    #[test]
    fn test_console_then_file_logging() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let log_path = temp_dir.path().join("dialogkit.log");

        configure_colored_logging(LogLevel::Warning).expect("first install succeeds");
        configure_file_logging(LogLevel::Info, Some(log_path.clone()))
            .expect("file is added to the installed subscriber");

        log::warn!("written to console and file");
        log::info!("below console level but written to file");
        log::debug!("dropped everywhere");

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("written to console and file"));
        assert!(content.contains("below console level but written to file"));
        assert!(!content.contains("dropped everywhere"));

        let unused_path = temp_dir.path().join("unused.log");
        let second = LoggingConfig::new(LogLevel::Debug)
            .with_file_logging(LogLevel::Debug, Some(unused_path.clone()))
            .init();
        assert!(matches!(
            second,
            Err(LoggingError::AlreadyInitialized { .. })
        ));
        assert!(!unused_path.exists());
    }
}
