//! Customer API error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use shared::SharedError;
use thiserror::Error;

use crate::types::MessageResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Customer not found")]
    NotFound { id: String },

    #[error("Invalid page value")]
    InvalidPage { page: i64 },

    #[error("Invalid limit value")]
    InvalidLimit { limit: i64 },

    #[error("All fields are required")]
    MissingFields,

    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },

    #[error("Customer with the same ID already exists")]
    DuplicateId { id: i64 },

    #[error("City or company does not exist for an existing customer")]
    NoMatchingCityCompany {
        city: Option<String>,
        company: Option<String>,
    },

    #[error("Failed to persist customers to {path}: {source}")]
    Persistence {
        path: String,
        source: std::io::Error,
    },

    #[error("Customer data error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status reported to the client for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidPage { .. }
            | ApiError::InvalidLimit { .. }
            | ApiError::MissingFields
            | ApiError::MissingField { .. }
            | ApiError::DuplicateId { .. }
            | ApiError::NoMatchingCityCompany { .. } => StatusCode::BAD_REQUEST,
            ApiError::Persistence { .. }
            | ApiError::SharedError(_)
            | ApiError::IoError(_)
            | ApiError::ServerStartup(_)
            | ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent in the response body. Server-side failures carry paths
    /// and OS errors that stay in the logs; clients get a fixed message.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Persistence { .. } | ApiError::SharedError(_) => {
                "Failed to save customers".to_string()
            }
            ApiError::IoError(_) | ApiError::ServerStartup(_) | ApiError::Config(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(MessageResponse::new(self.client_message()))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
