//! Liveness endpoint

use axum::extract::State;
use axum::response::Json;
use chrono::Utc;

use crate::server_impl::CustomerServer;
use crate::traits::CustomerPersistence;
use crate::types::HealthResponse;

/// Health check endpoint
pub async fn health_check<P>(State(server): State<CustomerServer<P>>) -> Json<HealthResponse>
where
    P: CustomerPersistence + 'static,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        customers: server.state().customer_count().await,
        uptime_seconds: server.state().get_uptime_seconds(),
        timestamp: Utc::now().timestamp(),
    })
}
