//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod file_store;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use file_store::JsonFileStore;
