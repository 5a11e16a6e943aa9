//! Shared types for the customer service
//!
//! Contains the customer record model, the persisted collection codec,
//! loose number and text readers, process identity and logging helpers used
//! by every binary in the workspace.

pub mod codec;
pub mod errors;
pub mod lenient;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
