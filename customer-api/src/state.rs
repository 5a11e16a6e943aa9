//! Customer API state management
//!
//! This module contains the state shared by every request handler.

use std::time::Instant;

use shared::Customer;
use tokio::sync::RwLock;

use crate::core::RecordStore;

/// Core service state
#[derive(Debug)]
pub struct ApiState {
    /// The customer collection. Writers hold the lock from validation through
    /// the save, so mutations are applied one at a time.
    pub store: RwLock<RecordStore>,

    pub server_start_time: Instant,
}

impl ApiState {
    /// Create state around an already loaded collection
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            store: RwLock::new(RecordStore::new(customers)),
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Number of customers currently held
    pub async fn customer_count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Copy of the current collection
    pub async fn snapshot(&self) -> Vec<Customer> {
        self.store.read().await.snapshot().to_vec()
    }
}
