use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("InputError: {0}")]
    Input(#[from] InputError),
    #[error("ArrayError: {0}")]
    Array(#[from] ArrayError),
    #[error("RegistryError: {0}")]
    Registry(#[from] RegistryError),
    #[error("LoggingError: {0}")]
    Logging(#[from] LoggingError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("{failed} of {total} files could not be converted")]
    ConversionFailed { failed: usize, total: usize },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML error: {source}")]
    Yaml {
        path: Option<String>,
        source: serde_yaml::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        path: Option<String>,
        source: serde_json::Error,
    },
    #[error("Archive error for {path}: {message}")]
    Archive { path: String, message: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input stream closed before a valid answer was given")]
    Closed,
    #[error("Failed to read input: {0}")]
    Read(#[source] std::io::Error),
    #[error("Failed to write prompt: {0}")]
    Write(#[source] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ArrayError {
    #[error("Can't create one hot. Index '{index}' is out of range (length '{length}')")]
    OneHotOutOfRange { index: usize, length: usize },
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("No entry registered under '{path}'")]
    NotFound { path: String },
    #[error("Name '{name}' is ambiguous, candidates: {}", candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("Path '{path}' is already registered")]
    Duplicate { path: String },
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logging is already initialized: {message}")]
    AlreadyInitialized { message: String },
    #[error("Invalid log level '{0}'")]
    InvalidLevel(String),
    #[error("Cannot open log file {path}: {source}")]
    LogFile {
        path: String,
        source: std::io::Error,
    },
    #[error("Cannot attach log file: {message}")]
    Reload { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::FileIo { .. } => ErrorSeverity::High,
                StorageError::ConfigDirNotFound => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Input(InputError::Closed) => ErrorSeverity::Low,
            AppError::Input(_) => ErrorSeverity::Medium,
            AppError::Array(_) => ErrorSeverity::Medium,
            AppError::Registry(_) => ErrorSeverity::High,
            AppError::Logging(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Storage(StorageError::FileIo { path, .. }) => {
                Some(format!("Check that '{}' exists and is readable", path))
            }
            AppError::Storage(StorageError::Yaml { path: Some(path), .. }) => {
                Some(format!("Check the YAML syntax of '{}'", path))
            }
            AppError::Storage(StorageError::ConfigDirNotFound) => {
                Some("Pass --config-dir to point at a configuration directory".to_string())
            }
            AppError::Registry(RegistryError::Ambiguous { .. }) => {
                Some("Use the fully qualified dotted path instead of the short name".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let cli_err = CliError::InvalidArguments("invalid arguments".to_string());
        assert_eq!(
            format!("{}", cli_err),
            "Invalid arguments: invalid arguments"
        );
    }

    #[test]
    fn test_conversion_failed_display() {
        let err = AppError::Cli(CliError::ConversionFailed {
            failed: 1,
            total: 3,
        });
        assert_eq!(
            format!("{}", err),
            "CliError: 1 of 3 files could not be converted"
        );
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_one_hot_error_display() {
        let err = ArrayError::OneHotOutOfRange {
            index: 5,
            length: 5,
        };
        assert_eq!(
            format!("{}", err),
            "Can't create one hot. Index '5' is out of range (length '5')"
        );
    }

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::Ambiguous {
            name: "Policy".to_string(),
            candidates: vec!["a.Policy".to_string(), "b.Policy".to_string()],
        };
        assert_eq!(
            format!("{}", err),
            "Name 'Policy' is ambiguous, candidates: a.Policy, b.Policy"
        );

        let err = RegistryError::NotFound {
            path: "x.Y".to_string(),
        };
        assert!(matches!(err, RegistryError::NotFound { .. }));
        if let RegistryError::NotFound { path } = err {
            assert_eq!(path, "x.Y");
        }
    }

    #[test]
    fn test_storage_error_hint_mentions_path() {
        let app_err = AppError::Storage(StorageError::FileIo {
            path: "domain.yml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);
        let hint = app_err.troubleshooting_hint().expect("hint expected");
        assert!(hint.contains("domain.yml"));
    }

    #[test]
    fn test_app_error_display_input() {
        let app_err = AppError::Input(InputError::Closed);
        assert_eq!(
            format!("{}", app_err),
            "InputError: Input stream closed before a valid answer was given"
        );
        assert_eq!(app_err.severity(), ErrorSeverity::Low);
        assert!(app_err.troubleshooting_hint().is_none());
    }
}
