//! Datasource response decoding
//!
//! PagerDuty's classic pagination envelope looks like
//! `{"teams": [...], "limit": 25, "offset": 0, "more": true}`. Decoding is a
//! pure function of the body bytes and the entity external ID.

use crate::error::{Error, Result};
use crate::pagination::next_cursor;
use crate::types::{JsonObject, JsonValue, Record};
use serde::Deserialize;

/// The datasource response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct DatasourceResponse {
    /// Page size the datasource actually applied
    #[serde(default)]
    pub limit: i64,
    /// Offset the datasource actually applied
    #[serde(default)]
    pub offset: i64,
    /// Whether more records follow this page
    #[serde(default)]
    pub more: bool,
    /// Remaining fields, including the record list keyed by entity
    #[serde(flatten)]
    pub collections: JsonObject,
}

impl DatasourceResponse {
    /// Take the record list stored under `entity_external_id`
    fn take_records(&mut self, entity_external_id: &str) -> Result<Vec<Record>> {
        match self.collections.remove(entity_external_id) {
            None | Some(JsonValue::Null) => Ok(Vec::new()),
            Some(JsonValue::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    JsonValue::Object(record) => Ok(record),
                    other => Err(Error::internal(format!(
                        "Datasource response field '{entity_external_id}' contains a non-object record: {other}."
                    ))),
                })
                .collect(),
            Some(other) => Err(Error::internal(format!(
                "Datasource response field '{entity_external_id}' is not a list: {other}."
            ))),
        }
    }
}

/// Records and next cursor decoded from one page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedPage {
    /// Records on the page
    pub objects: Vec<Record>,
    /// Next cursor; empty at the end of the collection
    pub next_cursor: String,
}

/// Decode a datasource response body
pub fn parse_response(body: &[u8], entity_external_id: &str) -> Result<DecodedPage> {
    let mut data: DatasourceResponse = serde_json::from_slice(body).map_err(|e| {
        Error::internal(format!("Failed to unmarshal the datasource response: {e}."))
    })?;

    let next_cursor = next_cursor(data.more, data.limit, data.offset).ok_or_else(|| {
        Error::internal(format!(
            "Datasource pagination values overflow: limit {}, offset {}.",
            data.limit, data.offset
        ))
    })?;

    let objects = data.take_records(entity_external_id)?;

    Ok(DecodedPage {
        objects,
        next_cursor,
    })
}
