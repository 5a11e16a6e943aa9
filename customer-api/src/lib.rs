//! Customer API library
//!
//! An HTTP service over a single in-memory customer collection that is
//! rewritten to a JSON file after every mutation.

pub mod config;
pub mod core;
pub mod error;
pub mod server_impl;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server_impl::CustomerServer;
pub use state::ApiState;
pub use types::*;

// Re-export trait definitions
pub use traits::CustomerPersistence;

// Re-export service implementations
pub use services::JsonFileStore;
