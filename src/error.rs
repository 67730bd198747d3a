//! Error types for the PagerDuty adapter
//!
//! Every failure the adapter reports carries a human-readable message and maps
//! to exactly one [`ErrorCode`] the host synchronization engine understands.
//! Non-success HTTP statuses from the datasource are *not* errors; they are
//! returned as a normal [`PageResponse`](crate::request::PageResponse).

use crate::types::ErrorCode;
use thiserror::Error;

/// The main error type for the adapter
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Validation Errors
    // ============================================================================
    #[error("{message}")]
    InvalidDatasourceConfig { message: String },

    #[error("{message}")]
    InvalidEntityConfig { message: String },

    #[error("{message}")]
    InvalidPageRequestConfig { message: String },

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    #[error("{message}")]
    Internal { message: String },

    #[error("{message}")]
    DatasourceFailed { message: String },

    // ============================================================================
    // Settings Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid datasource config error
    pub fn invalid_datasource_config(message: impl Into<String>) -> Self {
        Self::InvalidDatasourceConfig {
            message: message.into(),
        }
    }

    /// Create an invalid entity config error
    pub fn invalid_entity_config(message: impl Into<String>) -> Self {
        Self::InvalidEntityConfig {
            message: message.into(),
        }
    }

    /// Create an invalid page request config error
    pub fn invalid_page_request_config(message: impl Into<String>) -> Self {
        Self::InvalidPageRequestConfig {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a datasource failed error
    pub fn datasource_failed(message: impl Into<String>) -> Self {
        Self::DatasourceFailed {
            message: message.into(),
        }
    }

    /// Create a settings error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The error code reported to the host
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidDatasourceConfig { .. } | Error::Config { .. } => {
                ErrorCode::InvalidDatasourceConfig
            }
            Error::InvalidEntityConfig { .. } => ErrorCode::InvalidEntityConfig,
            Error::InvalidPageRequestConfig { .. } => ErrorCode::InvalidPageRequestConfig,
            Error::DatasourceFailed { .. } => ErrorCode::DatasourceFailed,
            Error::Internal { .. }
            | Error::YamlParse(_)
            | Error::JsonParse(_)
            | Error::Io(_) => ErrorCode::Internal,
        }
    }

    /// Check if the host may retry the identical request
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::Internal | ErrorCode::DatasourceFailed
        )
    }
}

/// Result type alias for the adapter
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error, keeping its code
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            let message = format!("{}: {inner}", message.into());
            match inner.code() {
                ErrorCode::InvalidDatasourceConfig => Error::config(message),
                ErrorCode::InvalidEntityConfig => Error::invalid_entity_config(message),
                ErrorCode::InvalidPageRequestConfig => Error::invalid_page_request_config(message),
                ErrorCode::DatasourceFailed => Error::datasource_failed(message),
                ErrorCode::Internal => Error::internal(message),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_bare_message() {
        let err = Error::invalid_entity_config("Ordered must be set to false.");
        assert_eq!(err.to_string(), "Ordered must be set to false.");

        let err = Error::config("client_timeout_seconds must be positive");
        assert_eq!(
            err.to_string(),
            "Configuration error: client_timeout_seconds must be positive"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::invalid_datasource_config("x").code(),
            ErrorCode::InvalidDatasourceConfig
        );
        assert_eq!(
            Error::invalid_entity_config("x").code(),
            ErrorCode::InvalidEntityConfig
        );
        assert_eq!(
            Error::invalid_page_request_config("x").code(),
            ErrorCode::InvalidPageRequestConfig
        );
        assert_eq!(Error::internal("x").code(), ErrorCode::Internal);
        assert_eq!(
            Error::datasource_failed("x").code(),
            ErrorCode::DatasourceFailed
        );
        assert_eq!(Error::config("x").code(), ErrorCode::InvalidDatasourceConfig);
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::internal("transport").is_retryable());
        assert!(Error::datasource_failed("body").is_retryable());

        assert!(!Error::invalid_datasource_config("host").is_retryable());
        assert!(!Error::invalid_entity_config("entity").is_retryable());
        assert!(!Error::invalid_page_request_config("cursor").is_retryable());
    }

    #[test]
    fn test_result_context_keeps_code() {
        let result: Result<()> = Err(Error::datasource_failed("inner"));
        let err = result.context("outer").unwrap_err();
        assert_eq!(err.code(), ErrorCode::DatasourceFailed);
        assert_eq!(err.to_string(), "outer: inner");
    }
}
