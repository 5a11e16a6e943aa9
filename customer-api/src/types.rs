//! Request and response payloads specific to the HTTP surface

use serde::{Deserialize, Serialize};
use shared::lenient;

use crate::core::query::{CustomerFilter, Pagination};

/// Query string of `GET /api/customers`.
///
/// Numbers are kept as raw text so that unparseable values fall back to
/// their defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    pub fn filter(&self) -> CustomerFilter {
        CustomerFilter::new(
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.city.as_deref(),
        )
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(
            parse_or_default(self.page.as_deref(), Pagination::DEFAULT_PAGE),
            parse_or_default(self.limit.as_deref(), Pagination::DEFAULT_LIMIT),
        )
    }
}

/// Read the leading integer of `raw`; missing, unparseable and zero values
/// all take the default
fn parse_or_default(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(lenient::parse_int_prefix)
        .filter(|value| *value != 0)
        .unwrap_or(default)
}

/// `{ "message": ... }` body used for confirmations and errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub customers: usize,
    pub uptime_seconds: u64,
    pub timestamp: i64,
}
