//! Common types used throughout the adapter
//!
//! Shared type aliases and the error code enumeration reported to the host.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single datasource record: field name to arbitrarily typed value
pub type Record = JsonObject;

// ============================================================================
// Error Codes
// ============================================================================

/// Error codes understood by the host synchronization engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Bad address, missing auth or an invalid config blob
    #[serde(rename = "ERROR_CODE_INVALID_DATASOURCE_CONFIG")]
    InvalidDatasourceConfig,
    /// Request shape incompatible with the entity model
    #[serde(rename = "ERROR_CODE_INVALID_ENTITY_CONFIG")]
    InvalidEntityConfig,
    /// Page size or cursor outside datasource limits
    #[serde(rename = "ERROR_CODE_INVALID_PAGE_REQUEST_CONFIG")]
    InvalidPageRequestConfig,
    /// Local, transport or envelope failure
    #[serde(rename = "ERROR_CODE_INTERNAL")]
    Internal,
    /// Body unreadable after a successful status line
    #[serde(rename = "ERROR_CODE_DATASOURCE_FAILED")]
    DatasourceFailed,
}

impl ErrorCode {
    /// Wire name of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidDatasourceConfig => "ERROR_CODE_INVALID_DATASOURCE_CONFIG",
            Self::InvalidEntityConfig => "ERROR_CODE_INVALID_ENTITY_CONFIG",
            Self::InvalidPageRequestConfig => "ERROR_CODE_INVALID_PAGE_REQUEST_CONFIG",
            Self::Internal => "ERROR_CODE_INTERNAL",
            Self::DatasourceFailed => "ERROR_CODE_DATASOURCE_FAILED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serde_matches_display() {
        for code in [
            ErrorCode::InvalidDatasourceConfig,
            ErrorCode::InvalidEntityConfig,
            ErrorCode::InvalidPageRequestConfig,
            ErrorCode::Internal,
            ErrorCode::DatasourceFailed,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{code}\""));
        }
    }
}
