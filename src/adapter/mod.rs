//! Adapter module
//!
//! Composes request validation, the datasource round trip and response
//! decoding into the single page-fetch operation the host calls.
//!
//! # Flow
//!
//! ```text
//! Request ──► validate_get_page_request ──► Client::get_page ──► PageResponse
//!               (no I/O, fail fast)          (one bounded GET)
//! ```

mod validation;

pub use validation::{API_HOST, MAX_PAGE_SIZE, MAX_RESULT_SIZE};

use crate::config::{AdapterConfig, DatasourceConfig};
use crate::datasource::{Client, Datasource};
use crate::entity::EntityRegistry;
use crate::error::{Error, Result};
use crate::request::{PageRequest, PageResponse, Request};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Page-at-a-time connector for the PagerDuty API
pub struct Adapter<C = Datasource> {
    client: C,
    entities: EntityRegistry,
    config: AdapterConfig,
}

impl Adapter<Datasource> {
    /// Create an adapter backed by the reqwest datasource client
    pub fn new(config: AdapterConfig) -> Result<Self> {
        config.validate()?;
        let client = Datasource::new(&config)?;
        Ok(Self::with_client(client, EntityRegistry::pagerduty(), config))
    }
}

impl<C: Client> Adapter<C> {
    /// Create an adapter around any datasource client
    pub fn with_client(client: C, entities: EntityRegistry, config: AdapterConfig) -> Self {
        Self {
            client,
            entities,
            config,
        }
    }

    /// Supported entities
    pub fn entities(&self) -> &EntityRegistry {
        &self.entities
    }

    /// Adapter settings
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// The datasource client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Validate the request and fetch one page
    ///
    /// Validation failures return before any network call. A non-success
    /// datasource status is returned as a normal [`PageResponse`]. When the
    /// request config carries its own timeout it bounds the whole fetch,
    /// alongside the client's fixed per-call deadline.
    pub async fn get_page<Cfg: DatasourceConfig>(
        &self,
        cancel: &CancellationToken,
        request: &Request<Cfg>,
    ) -> Result<PageResponse> {
        self.validate_get_page_request(request)?;

        let page_request = PageRequest::from_request(request);
        let fetch = self.client.get_page(cancel, &page_request);

        match request.config.request_timeout() {
            Some(timeout) => tokio::time::timeout(timeout, fetch).await.map_err(|_| {
                debug!("Page fetch exceeded request timeout of {:?}", timeout);
                Error::internal(format!(
                    "Failed to send request to datasource: request timeout of {}s exceeded.",
                    timeout.as_secs()
                ))
            })?,
            None => fetch.await,
        }
    }
}

impl<C> std::fmt::Debug for Adapter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adapter")
            .field("entities", &self.entities)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
