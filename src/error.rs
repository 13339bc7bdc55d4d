use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
    #[error("PaginationError: {0}")]
    Pagination(#[from] PaginationError),
    #[error("RepositoryError: {0}")]
    Repository(#[from] RepositoryError),
    #[error("UtilsError: {0}")]
    Utils(#[from] UtilsError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Unknown configuration key: {key}")]
    UnknownConfigKey { key: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration save failed: {message}")]
    ConfigSaveFailed { message: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
    #[error("Dataset parse error in {path}: {message}")]
    DatasetParseError { path: String, message: String },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Host-side precondition failures. The engine itself never raises these;
/// they are reported before an input reaches it.
#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("Page size must be at least 1, got {value}")]
    InvalidPageSize { value: i64 },
    #[error("Total items cannot be negative, got {value}")]
    InvalidTotalItems { value: i64 },
    #[error("Max page buttons must be at least 1, got {value}")]
    InvalidMaxPageButtons { value: i64 },
}

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Pokemon {id} not found")]
    NotFound { id: u32 },
    #[error("Pokemon '{name}' not found")]
    NameNotFound { name: String },
    #[error("Data source unavailable: {message}")]
    Unavailable { message: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Validation error: {message}")]
    Validation { message: String },
    #[error("Input processing error: {message}")]
    InputProcessing { message: String },
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
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::ConfigDirNotFound => ErrorSeverity::Critical,
                _ => ErrorSeverity::Medium,
            },
            AppError::Display(_) => ErrorSeverity::Low,
            AppError::Pagination(_) => ErrorSeverity::Medium,
            AppError::Repository(repository_error) => match repository_error {
                RepositoryError::Unavailable { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Utils(_) => ErrorSeverity::Low,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Pagination(err) => err.to_string(),
            AppError::Repository(RepositoryError::NotFound { id }) => {
                format!("Pokemon #{} not found", id)
            }
            AppError::Config(ConfigError::InvalidValue { field, reason, .. }) => {
                format!("Invalid value for '{}': {}", field, reason)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Pagination(PaginationError::InvalidPageSize { .. }) => {
                Some("Pass a page size of 1 or more with --page-size".to_string())
            }
            AppError::Cli(CliError::UnknownConfigKey { .. }) => {
                Some("'poke-pager config show' to list the available keys".to_string())
            }
            AppError::Storage(StorageError::DatasetParseError { .. }) => Some(
                "The dataset must be a JSON array of {\"id\", \"name\", \"spriteUrl\", \"types\"} objects"
                    .to_string(),
            ),
            _ => None,
        }
    }
}
