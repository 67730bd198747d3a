//! # PagerDuty Adapter
//!
//! A paginated connector that fetches PagerDuty teams and serves them to a
//! host synchronization engine one page at a time.
//!
//! ## Features
//!
//! - **Fail-fast validation**: address, auth, entity, page size and cursor
//!   checks run before any network call
//! - **Offset cursors**: next cursor computed from the datasource's echoed
//!   `limit` and `offset`
//! - **Bounded calls**: a fixed per-call deadline composed with the caller's
//!   cancellation token
//! - **Throttling as data**: non-success statuses come back as a page with the
//!   status and `Retry-After` hint, never as an error
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagerduty_adapter::{Adapter, AdapterConfig, Config, Request};
//! use pagerduty_adapter::request::{AuthCredentials, EntityConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! let adapter = Adapter::new(AdapterConfig::default())?;
//! let mut request = Request {
//!     address: "https://api.pagerduty.com".to_string(),
//!     auth: Some(AuthCredentials::http_authorization("Token token=...")),
//!     entity: EntityConfig::new("teams", ["id", "name"]),
//!     ordered: false,
//!     page_size: 100,
//!     cursor: String::new(),
//!     config: Config::default(),
//! };
//!
//! loop {
//!     let page = adapter.get_page(&CancellationToken::new(), &request).await?;
//!     // ... hand page.objects to the host
//!     if page.next_cursor.is_empty() {
//!         break;
//!     }
//!     request.cursor = page.next_cursor;
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                Adapter::get_page(cancel, request)         │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────────┬─────────┴──────────┬───────────────────┐
//! │    Validation    │    Datasource      │     Decode        │
//! ├──────────────────┼────────────────────┼───────────────────┤
//! │ Config blob      │ limit/offset query │ Envelope parse    │
//! │ Approved host    │ Authorization      │ Record extraction │
//! │ Entity/attrs     │ 5s deadline        │ Next cursor       │
//! │ Page/cursor caps │ Cancellation       │                   │
//! └──────────────────┴────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the adapter
pub mod error;

/// Common types and type aliases
pub mod types;

/// Adapter settings and the datasource config blob
pub mod config;

/// Supported entities
pub mod entity;

/// Page request and response types
pub mod request;

/// Offset cursor arithmetic
pub mod pagination;

/// Datasource HTTP client and response decoding
pub mod datasource;

/// Request validation and page fetching
pub mod adapter;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use adapter::Adapter;
pub use config::{AdapterConfig, Config, DatasourceConfig};
pub use entity::{Entity, EntityRegistry};
pub use request::{PageRequest, PageResponse, Request};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
