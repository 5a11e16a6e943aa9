//! Text encoding of the persisted customer collection
//!
//! The collection is stored as a pretty-printed JSON array. Files written by
//! the older JavaScript service wrap the array in an ES module
//! (`export default [...]`); those are still accepted on read.

use serde::Deserialize;

use crate::errors::{SharedError, SharedResult};
use crate::lenient;
use crate::types::{Customer, ProcessId};

const LEGACY_MODULE_PREFIX: &str = "export default";

/// A record as it may appear on disk. The older service stored request
/// bodies verbatim, so ids can be strings or missing and any text field can
/// be `null`.
#[derive(Debug, Deserialize)]
struct StoredCustomer {
    #[serde(default, deserialize_with = "lenient::deserialize_id")]
    id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    city: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    company: Option<String>,
}

impl StoredCustomer {
    fn into_customer(self) -> Option<Customer> {
        Some(Customer {
            id: self.id?,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
        })
    }
}

/// Encode the full collection as human-readable JSON
pub fn encode_collection(customers: &[Customer]) -> SharedResult<String> {
    serde_json::to_string_pretty(customers).map_err(|e| SharedError::SerializationError {
        message: e.to_string(),
    })
}

/// Decode a collection previously written by [`encode_collection`] or by the
/// legacy module writer. Blank input decodes to an empty collection.
///
/// Records without a usable id cannot be addressed and are dropped with a
/// warning; `null` text fields become empty strings.
pub fn decode_collection(content: &str) -> SharedResult<Vec<Customer>> {
    let mut body = content.trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(rest) = body.strip_prefix(LEGACY_MODULE_PREFIX) {
        body = rest.trim().trim_end_matches(';').trim_end();
    }

    let stored: Vec<StoredCustomer> =
        serde_json::from_str(body).map_err(|e| SharedError::DeserializationError {
            message: e.to_string(),
        })?;

    let mut customers = Vec::with_capacity(stored.len());
    for (index, record) in stored.into_iter().enumerate() {
        match record.into_customer() {
            Some(customer) => customers.push(customer),
            None => {
                crate::process_warn!(
                    ProcessId::current(),
                    "⚠️ Skipping stored customer at position {} without a usable id",
                    index
                );
            }
        }
    }

    Ok(customers)
}
