//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod query;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use query::{CustomerFilter, Pagination};
pub use store::RecordStore;
