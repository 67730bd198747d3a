//! Page request and response types
//!
//! [`Request`] is what the host synchronization engine hands the adapter.
//! [`PageRequest`] is the reduced, validated form the datasource client
//! consumes, and [`PageResponse`] is the normalized page handed back.

use crate::types::Record;
use serde::{Deserialize, Serialize};

// ============================================================================
// Inbound Request
// ============================================================================

/// Credentials supplied by the host
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentials {
    /// Value sent verbatim as the `Authorization` header
    #[serde(default)]
    pub http_authorization: String,
}

impl AuthCredentials {
    /// Wrap an `Authorization` header value
    pub fn http_authorization(value: impl Into<String>) -> Self {
        Self {
            http_authorization: value.into(),
        }
    }
}

impl std::fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthCredentials")
            .field("http_authorization", &"<redacted>")
            .finish()
    }
}

/// An attribute the host wants populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeConfig {
    /// Attribute name in the datasource
    pub external_id: String,
}

impl AttributeConfig {
    /// Create an attribute by external ID
    pub fn new(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
        }
    }
}

/// The entity a page request targets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Entity external ID (e.g. "teams")
    pub external_id: String,
    /// Requested attributes
    #[serde(default)]
    pub attributes: Vec<AttributeConfig>,
    /// Nested entities; unsupported by this adapter
    #[serde(default)]
    pub child_entities: Vec<EntityConfig>,
}

impl EntityConfig {
    /// Create an entity config requesting the given attributes
    pub fn new<I, S>(external_id: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            external_id: external_id.into(),
            attributes: attributes.into_iter().map(AttributeConfig::new).collect(),
            child_entities: Vec::new(),
        }
    }

    /// Whether the given attribute is requested
    pub fn requests_attribute(&self, external_id: &str) -> bool {
        self.attributes.iter().any(|a| a.external_id == external_id)
    }
}

/// A page fetch request from the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request<C> {
    /// Datasource address
    pub address: String,
    /// Auth material
    #[serde(default)]
    pub auth: Option<AuthCredentials>,
    /// Target entity
    pub entity: EntityConfig,
    /// Whether the host requires results sorted by unique ID
    #[serde(default)]
    pub ordered: bool,
    /// Requested number of records
    pub page_size: u64,
    /// Opaque cursor; empty for the first page
    #[serde(default)]
    pub cursor: String,
    /// Datasource configuration blob
    pub config: C,
}

impl<C> Request<C> {
    /// The `Authorization` value, empty when absent
    pub fn token(&self) -> &str {
        self.auth
            .as_ref()
            .map_or("", |auth| auth.http_authorization.as_str())
    }
}

// ============================================================================
// Datasource Page Request
// ============================================================================

/// A validated request for one datasource page
#[derive(Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Base address of the datasource API
    pub base_url: String,
    /// Entity external ID, used as the path segment and envelope field
    pub entity_external_id: String,
    /// Sent as `limit`
    pub page_size: u64,
    /// Sent as `offset`; empty for the first page
    pub cursor: String,
    /// Sent as the `Authorization` header when non-empty
    pub token: String,
}

impl PageRequest {
    /// Reduce a host request to what the datasource client needs
    pub fn from_request<C>(request: &Request<C>) -> Self {
        Self {
            base_url: request.address.clone(),
            entity_external_id: request.entity.external_id.clone(),
            page_size: request.page_size,
            cursor: request.cursor.clone(),
            token: request.token().to_string(),
        }
    }
}

impl std::fmt::Debug for PageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRequest")
            .field("base_url", &self.base_url)
            .field("entity_external_id", &self.entity_external_id)
            .field("page_size", &self.page_size)
            .field("cursor", &self.cursor)
            .field("has_token", &!self.token.is_empty())
            .finish()
    }
}

// ============================================================================
// Page Response
// ============================================================================

/// One page of records, or the datasource's refusal to serve it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    /// HTTP status returned by the datasource
    pub status_code: u16,
    /// Records on this page
    #[serde(default)]
    pub objects: Vec<Record>,
    /// Cursor for the next page; empty at the end of the collection
    #[serde(default)]
    pub next_cursor: String,
    /// `Retry-After` header value, empty when absent
    #[serde(default)]
    pub retry_after_header: String,
}

impl PageResponse {
    /// Whether the datasource served the page
    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }

    /// Whether paging is exhausted
    pub fn is_last_page(&self) -> bool {
        self.is_success() && self.next_cursor.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(auth: Option<AuthCredentials>) -> Request<()> {
        Request {
            address: "https://api.pagerduty.com".to_string(),
            auth,
            entity: EntityConfig::new("teams", ["id", "name"]),
            ordered: false,
            page_size: 25,
            cursor: "50".to_string(),
            config: (),
        }
    }

    #[test]
    fn test_page_request_from_request() {
        let page = PageRequest::from_request(&request(Some(AuthCredentials::http_authorization(
            "Token token=abc",
        ))));

        assert_eq!(page.base_url, "https://api.pagerduty.com");
        assert_eq!(page.entity_external_id, "teams");
        assert_eq!(page.page_size, 25);
        assert_eq!(page.cursor, "50");
        assert_eq!(page.token, "Token token=abc");
    }

    #[test]
    fn test_missing_auth_yields_empty_token() {
        let page = PageRequest::from_request(&request(None));
        assert!(page.token.is_empty());
    }

    #[test]
    fn test_debug_hides_token() {
        let auth = AuthCredentials::http_authorization("Token token=secret");
        assert!(!format!("{auth:?}").contains("secret"));

        let page = PageRequest::from_request(&request(Some(auth)));
        assert!(!format!("{page:?}").contains("secret"));
    }

    #[test]
    fn test_requests_attribute() {
        let entity = EntityConfig::new("teams", ["name", "id"]);
        assert!(entity.requests_attribute("id"));
        assert!(!entity.requests_attribute("summary"));
    }

    #[test]
    fn test_page_response_flags() {
        let last = PageResponse {
            status_code: 200,
            ..Default::default()
        };
        assert!(last.is_last_page());

        let throttled = PageResponse {
            status_code: 429,
            retry_after_header: "30".to_string(),
            ..Default::default()
        };
        assert!(!throttled.is_success());
        assert!(!throttled.is_last_page());
    }
}
