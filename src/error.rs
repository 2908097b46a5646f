use crate::core::services::types::ServiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
    #[error("ServiceError: {0}")]
    Service(#[from] ServiceError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("{operation} failed: {message}")]
    OperationFailed { operation: String, message: String },
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("HTTP error: {status} {}", .message.as_deref().unwrap_or("(no message)"))]
    Http {
        status: u16,
        endpoint: String,
        message: Option<String>,
    },
    #[error("Authentication failed")]
    Unauthorized {
        status: u16,
        endpoint: String,
        server_message: Option<String>,
    },
    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("Request to {endpoint} was rejected by the server")]
    Rejected {
        endpoint: String,
        message: Option<String>,
    },
    #[error("Unexpected response from {endpoint}: {message}")]
    UnexpectedResponse { endpoint: String, message: String },
}

impl ApiError {
    /// Message supplied by the server in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } | ApiError::Rejected { message, .. } => {
                message.as_deref()
            }
            ApiError::Unauthorized { server_message, .. } => server_message.as_deref(),
            _ => None,
        }
        .filter(|m| !m.trim().is_empty())
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration field '{field}' is missing")]
    MissingField { field: String, hint: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

fn api_severity(api_error: &ApiError) -> ErrorSeverity {
    match api_error {
        ApiError::Unauthorized { .. } => ErrorSeverity::High,
        ApiError::Timeout { .. } | ApiError::Transport { .. } => ErrorSeverity::Medium,
        ApiError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
        _ => ErrorSeverity::Medium,
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => api_severity(api_error),
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Display(_) => ErrorSeverity::Low,
            AppError::Service(service_error) => match service_error {
                ServiceError::Api(api_error) => api_severity(api_error),
                ServiceError::Validation { .. } => ErrorSeverity::Medium,
                ServiceError::NotFound { .. } => ErrorSeverity::Medium,
                ServiceError::Unsupported { .. } => ErrorSeverity::Low,
            },
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Api(api_error) | AppError::Service(ServiceError::Api(api_error)) => {
                match api_error.server_message() {
                    Some(message) => message.to_string(),
                    None => api_error.to_string(),
                }
            }
            AppError::Service(ServiceError::NotFound { resource_type, id }) => {
                format!("{} {} not found", resource_type, id)
            }
            AppError::Cli(CliError::OperationFailed { message, .. }) => message.clone(),
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        let api_error = match self {
            AppError::Api(e) | AppError::Service(ServiceError::Api(e)) => Some(e),
            _ => None,
        };

        match (self, api_error) {
            (_, Some(ApiError::Unauthorized { .. })) => {
                Some("Set ERP_ADMIN_TOKEN or pass --token with a valid access token".to_string())
            }
            (_, Some(ApiError::Timeout { .. } | ApiError::Transport { .. })) => Some(
                "Check the server URL ('erp-admin config show') and your connection".to_string(),
            ),
            (AppError::Config(ConfigError::MissingField { hint, .. }), _) => Some(hint.clone()),
            (AppError::Service(ServiceError::NotFound { .. }), _) => {
                Some("Use the 'list' subcommand to see available records".to_string())
            }
            _ => None,
        }
    }
}
