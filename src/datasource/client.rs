//! Datasource HTTP client
//!
//! Issues exactly one GET per page. Non-success statuses are returned as a
//! [`PageResponse`] carrying the status and `Retry-After` hint so the caller
//! can run its own backoff; only local, transport and body failures are
//! errors. Nothing is retried here.

use super::decode::parse_response;
use crate::config::AdapterConfig;
use crate::error::{Error, Result};
use crate::request::{PageRequest, PageResponse};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, RETRY_AFTER};
use reqwest::StatusCode;
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

/// Upper bound on one datasource round trip, regardless of caller timeouts
pub const CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches one page from the datasource
#[async_trait]
pub trait Client: Send + Sync {
    /// Perform one round trip for the given page
    async fn get_page(
        &self,
        cancel: &CancellationToken,
        request: &PageRequest,
    ) -> Result<PageResponse>;
}

/// reqwest-backed datasource client
#[derive(Debug, Clone)]
pub struct Datasource {
    client: reqwest::Client,
    call_timeout: Duration,
}

impl Datasource {
    /// Build a client from adapter settings, bounded by [`CALL_TIMEOUT`]
    pub fn new(config: &AdapterConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.client_timeout())
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {e}.")))?;

        Ok(Self::with_client(client, CALL_TIMEOUT))
    }

    /// Wrap an existing reqwest client with its own per-call deadline
    pub fn with_client(client: reqwest::Client, call_timeout: Duration) -> Self {
        Self {
            client,
            call_timeout,
        }
    }

    /// The fixed per-call deadline
    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }
}

#[async_trait]
impl Client for Datasource {
    async fn get_page(
        &self,
        cancel: &CancellationToken,
        request: &PageRequest,
    ) -> Result<PageResponse> {
        let url = build_url(request)?;
        debug!("GET {}", url);

        let mut req = self.client.get(url);
        if !request.token.is_empty() {
            req = req.header(AUTHORIZATION, request.token.as_str());
        }

        // Send and body read share one deadline
        let scope = cancel.child_token();
        let deadline = Instant::now() + self.call_timeout;

        let response = match bounded(&scope, deadline, req.send()).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                return Err(Error::internal(format!(
                    "Failed to send request to datasource: {e}."
                )))
            }
            Err(interrupted) => {
                return Err(Error::internal(format!(
                    "Failed to send request to datasource: {interrupted}."
                )))
            }
        };

        let status = response.status();
        let retry_after_header = response
            .headers()
            .get(RETRY_AFTER)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_default();

        let mut page = PageResponse {
            status_code: status.as_u16(),
            retry_after_header,
            ..Default::default()
        };

        if status != StatusCode::OK {
            warn!(
                "Datasource returned {} for {} (retry-after: {:?})",
                status.as_u16(),
                request.entity_external_id,
                page.retry_after_header
            );
            return Ok(page);
        }

        let body = match bounded(&scope, deadline, response.bytes()).await {
            Ok(Ok(body)) => body,
            Ok(Err(e)) => {
                debug!("Body read failed: {}", e);
                return Err(Error::datasource_failed("Failed to read response body."));
            }
            Err(interrupted) => {
                debug!("Body read {}", interrupted);
                return Err(Error::datasource_failed("Failed to read response body."));
            }
        };

        let decoded = parse_response(&body, &request.entity_external_id)?;
        debug!(
            "Fetched {} {} record(s), next cursor {:?}",
            decoded.objects.len(),
            request.entity_external_id,
            decoded.next_cursor
        );

        page.objects = decoded.objects;
        page.next_cursor = decoded.next_cursor;
        Ok(page)
    }
}

/// Compose `{base}/{entity}?limit={page_size}&offset={cursor}`
fn build_url(request: &PageRequest) -> Result<Url> {
    let raw = format!(
        "{}/{}",
        request.base_url.trim_end_matches('/'),
        request.entity_external_id
    );
    let mut url = Url::parse(&raw).map_err(|e| {
        Error::internal(format!("Failed to create HTTP request to datasource: {e}."))
    })?;

    url.query_pairs_mut()
        .append_pair("limit", &request.page_size.to_string())
        .append_pair("offset", &request.cursor);

    Ok(url)
}

/// Why an in-flight exchange stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interrupted {
    Cancelled,
    DeadlineExceeded,
}

impl fmt::Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("request cancelled"),
            Self::DeadlineExceeded => f.write_str("deadline exceeded"),
        }
    }
}

/// Run `fut` until it completes, the scope is cancelled, or the deadline
/// passes. The losing future is dropped, which releases its connection.
async fn bounded<F: Future>(
    scope: &CancellationToken,
    deadline: Instant,
    fut: F,
) -> std::result::Result<F::Output, Interrupted> {
    tokio::select! {
        biased;
        () = scope.cancelled() => Err(Interrupted::Cancelled),
        outcome = tokio::time::timeout_at(deadline, fut) => {
            outcome.map_err(|_| Interrupted::DeadlineExceeded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_request(cursor: &str) -> PageRequest {
        PageRequest {
            base_url: "https://api.pagerduty.com".to_string(),
            entity_external_id: "teams".to_string(),
            page_size: 25,
            cursor: cursor.to_string(),
            token: String::new(),
        }
    }

    #[test]
    fn test_build_url_first_page() {
        let url = build_url(&page_request("")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.pagerduty.com/teams?limit=25&offset="
        );
    }

    #[test]
    fn test_build_url_with_cursor() {
        let url = build_url(&page_request("75")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.pagerduty.com/teams?limit=25&offset=75"
        );
    }

    #[test]
    fn test_new_uses_fixed_deadline() {
        let datasource = Datasource::new(&AdapterConfig::default()).unwrap();
        assert_eq!(datasource.call_timeout(), CALL_TIMEOUT);
    }

    #[test]
    fn test_build_url_invalid_base() {
        let mut request = page_request("");
        request.base_url = "not a url".to_string();
        let err = build_url(&request).unwrap_err();
        assert_eq!(err.code(), crate::types::ErrorCode::Internal);
    }
}
