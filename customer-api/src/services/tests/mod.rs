//! Service tests for the customer API
//!
//! Exercises the real service implementations against temporary directories.

mod file_store;
