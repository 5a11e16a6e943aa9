//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::lenient;

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Process identifier attached to every log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// The customer HTTP service
    CustomerApi,
    /// Code running before any process identity was registered (tests, tools)
    Unregistered,
}

impl ProcessId {
    /// Initialize the global process ID for the customer service
    pub fn init_customer_api() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::CustomerApi)
    }

    /// Get the global process ID, `Unregistered` until an init_* call
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&ProcessId::Unregistered)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::CustomerApi => write!(f, "customer_api"),
            ProcessId::Unregistered => write!(f, "unregistered"),
        }
    }
}

/// A single customer record as stored and served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub company: String,
}

impl Customer {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
            company: company.into(),
        }
    }
}

/// Body of a create request. Every field may be missing on the wire.
///
/// Ids sent as numeric strings are accepted; values that cannot be read as
/// an id or as text count as absent, so they surface as validation errors
/// rather than body rejections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    #[serde(default, deserialize_with = "lenient::deserialize_id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub company: Option<String>,
}

impl NewCustomer {
    /// True when no field carries a usable value.
    ///
    /// A zero id and empty strings count as absent, so `{"id": 0, "city": ""}`
    /// is blank.
    pub fn is_blank(&self) -> bool {
        let blank = |s: &Option<String>| s.as_deref().is_none_or(str::is_empty);

        self.id.is_none_or(|id| id == 0)
            && blank(&self.first_name)
            && blank(&self.last_name)
            && blank(&self.city)
            && blank(&self.company)
    }

    /// Build the stored record. Returns `None` without an id; absent text
    /// fields become empty strings.
    pub fn into_customer(self) -> Option<Customer> {
        let id = self.id?;
        Some(Customer {
            id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
        })
    }
}

/// Body of an update request.
///
/// `None` means "leave unchanged"; `Some("")` clears the field. The id is
/// not part of the patch and cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPatch {
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize_text")]
    pub company: Option<String>,
}

impl CustomerPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.city.is_none()
            && self.company.is_none()
    }

    /// Merge the provided fields into `customer`, returning the updated copy
    pub fn apply(&self, customer: &Customer) -> Customer {
        let mut updated = customer.clone();
        if let Some(first_name) = &self.first_name {
            updated.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            updated.last_name = last_name.clone();
        }
        if let Some(city) = &self.city {
            updated.city = city.clone();
        }
        if let Some(company) = &self.company {
            updated.company = company.clone();
        }
        updated
    }
}
