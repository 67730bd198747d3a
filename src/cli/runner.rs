//! CLI runner - executes commands

use crate::adapter::Adapter;
use crate::cli::commands::{Cli, Commands, PageArgs};
use crate::config::{AdapterConfig, Config};
use crate::error::Result;
use crate::request::{AuthCredentials, EntityConfig, Request};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Environment variable consulted when `--token` is absent
pub const TOKEN_ENV: &str = "PAGERDUTY_TOKEN";

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Validate { page } => self.validate(page),
            Commands::GetPage { page } => self.get_page(page).await,
            Commands::Entities => self.entities(),
        }
    }

    /// Load adapter settings, falling back to defaults
    fn settings(&self) -> Result<AdapterConfig> {
        match &self.cli.settings {
            Some(path) => AdapterConfig::from_file(path),
            None => Ok(AdapterConfig::default()),
        }
    }

    /// Load the datasource config blob, falling back to defaults
    fn datasource_config(&self) -> Result<Config> {
        match &self.cli.config {
            Some(path) => Config::from_file(path),
            None => Ok(Config::default()),
        }
    }

    /// Assemble a host-style request from flags
    fn build_request(&self, page: &PageArgs) -> Result<Request<Config>> {
        let token = page
            .token
            .clone()
            .or_else(|| std::env::var(TOKEN_ENV).ok())
            .filter(|t| !t.is_empty());

        Ok(Request {
            address: page.address.clone(),
            auth: token.map(AuthCredentials::http_authorization),
            entity: EntityConfig::new(page.entity.clone(), page.attributes.iter().cloned()),
            ordered: page.ordered,
            page_size: page.page_size,
            cursor: page.cursor.clone(),
            config: self.datasource_config()?,
        })
    }

    fn validate(&self, page: &PageArgs) -> Result<()> {
        let adapter = Adapter::new(self.settings()?)?;
        let request = self.build_request(page)?;

        adapter.validate_get_page_request(&request)?;
        println!("{}", json!({ "valid": true }));
        Ok(())
    }

    async fn get_page(&self, page: &PageArgs) -> Result<()> {
        let adapter = Adapter::new(self.settings()?)?;
        let request = self.build_request(page)?;

        let cancel = CancellationToken::new();
        let on_signal = cancel.clone();
        let signal_task = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling in-flight fetch");
                on_signal.cancel();
            }
        });

        let result = adapter.get_page(&cancel, &request).await;
        signal_task.abort();
        let response = result?;

        if response.is_success() {
            info!(
                "Fetched {} record(s), next cursor {:?}",
                response.objects.len(),
                response.next_cursor
            );
        } else {
            warn!(
                "Datasource declined the request with status {} (retry-after: {:?})",
                response.status_code, response.retry_after_header
            );
        }

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }

    fn entities(&self) -> Result<()> {
        let adapter = Adapter::new(self.settings()?)?;
        let entities: Vec<_> = adapter
            .entities()
            .iter()
            .map(|(id, entity)| {
                json!({
                    "external_id": id,
                    "unique_id_attribute": entity.unique_id_attribute,
                })
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&entities)?);
        Ok(())
    }
}
