//! Page request validation
//!
//! Checks run in a fixed order and stop at the first violation. Nothing here
//! performs I/O.

use super::Adapter;
use crate::config::DatasourceConfig;
use crate::error::{Error, Result};
use crate::pagination::parse_cursor;
use crate::request::Request;
use tracing::debug;

/// PagerDuty API address; the only one requests may target
pub const API_HOST: &str = "https://api.pagerduty.com";

/// Maximum page size allowed in a page request
pub const MAX_PAGE_SIZE: u64 = 100;

/// Classic pagination cannot reach past this many records
pub const MAX_RESULT_SIZE: u64 = 10_000;

impl<C> Adapter<C> {
    /// Validate the fields of a page request
    pub fn validate_get_page_request<Cfg: DatasourceConfig>(
        &self,
        request: &Request<Cfg>,
    ) -> Result<()> {
        if let Err(e) = request.config.validate() {
            return Err(Error::invalid_datasource_config(format!(
                "Provided config is invalid: {e}."
            )));
        }

        if request.address != API_HOST {
            return Err(Error::invalid_datasource_config(
                "PagerDuty API URL is invalid.",
            ));
        }

        if request.token().is_empty() {
            return Err(Error::invalid_datasource_config(
                "PagerDuty auth is missing required token.",
            ));
        }

        let Some(entity) = self.entities.get(&request.entity.external_id) else {
            return Err(Error::invalid_entity_config(
                "Provided entity external ID is invalid.",
            ));
        };

        // The host cannot identify records without the unique ID
        if !request.entity.requests_attribute(&entity.unique_id_attribute) {
            return Err(Error::invalid_entity_config(
                "Requested entity attributes are missing unique ID attribute.",
            ));
        }

        if !request.entity.child_entities.is_empty() {
            return Err(Error::invalid_entity_config(
                "Requested entity does not support child entities.",
            ));
        }

        // PagerDuty cannot sort by unique ID
        if request.ordered {
            return Err(Error::invalid_entity_config("Ordered must be set to false."));
        }

        if request.page_size == 0 {
            return Err(Error::invalid_page_request_config(
                "Provided page size must be positive.",
            ));
        }
        if request.page_size > MAX_PAGE_SIZE {
            return Err(Error::invalid_page_request_config(format!(
                "Provided page size ({}) exceeds maximum ({MAX_PAGE_SIZE}).",
                request.page_size
            )));
        }

        let offset = parse_cursor(&request.cursor).map_err(|e| {
            Error::invalid_page_request_config(format!("Invalid cursor value: {e}."))
        })?;

        if let Some(offset) = offset {
            let exceeds = offset
                .checked_add(request.page_size)
                .map_or(true, |end| end > MAX_RESULT_SIZE);
            if exceeds {
                return Err(Error::invalid_page_request_config(format!(
                    "PagerDuty does not allow requesting more than {MAX_RESULT_SIZE} records."
                )));
            }
        }

        debug!(
            "Validated page request for {} (page_size={}, cursor={:?})",
            request.entity.external_id, request.page_size, request.cursor
        );

        Ok(())
    }
}
