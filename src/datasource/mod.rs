//! Datasource module
//!
//! One bounded HTTP round trip per page against the PagerDuty REST API.
//!
//! # Overview
//!
//! - [`Client`]: the page fetching seam the adapter depends on
//! - [`Datasource`]: the reqwest implementation, with a fixed per-call
//!   deadline layered under the caller's cancellation token
//! - [`parse_response`]: pure decoding of the JSON envelope into records and
//!   the next cursor

mod client;
mod decode;

pub use client::{Client, Datasource, CALL_TIMEOUT};
pub use decode::{parse_response, DatasourceResponse, DecodedPage};
