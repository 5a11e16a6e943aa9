//! Main server implementation
//!
//! This module contains the CustomerServer struct that wires the shared state
//! and the injected persistence service into the HTTP router.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};
use shared::{Customer, ProcessId, logging, process_info};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResult};
use crate::state::ApiState;
use crate::traits::CustomerPersistence;
use crate::web::handlers;

/// Customer server with dependency injected persistence
pub struct CustomerServer<P>
where
    P: CustomerPersistence,
{
    state: Arc<ApiState>,
    persistence: Arc<P>,
}

impl<P> Clone for CustomerServer<P>
where
    P: CustomerPersistence,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            persistence: Arc::clone(&self.persistence),
        }
    }
}

impl<P> CustomerServer<P>
where
    P: CustomerPersistence + 'static,
{
    /// Create a server around an already loaded collection
    pub fn new(persistence: P, customers: Vec<Customer>) -> Self {
        Self {
            state: Arc::new(ApiState::new(customers)),
            persistence: Arc::new(persistence),
        }
    }

    /// Create a server seeded from whatever `persistence` holds
    pub async fn load(persistence: P) -> ApiResult<Self> {
        let customers = persistence.load().await?;
        process_info!(
            ProcessId::current(),
            "📂 Loaded {} customers from {}",
            customers.len(),
            persistence.location()
        );
        Ok(Self::new(persistence, customers))
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Customer collection
            .route(
                "/api/customers",
                get(handlers::list_customers::<P>).post(handlers::create_customer::<P>),
            )
            .route(
                "/api/customers/:id",
                get(handlers::get_customer::<P>)
                    .put(handlers::update_customer::<P>)
                    .delete(handlers::delete_customer::<P>),
            )
            .route("/api/cities", get(handlers::list_cities::<P>))

            // Health check
            .route("/health", get(handlers::health_check::<P>))

            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self, bind_address: SocketAddr) -> ApiResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| ApiError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        process_info!(
            ProcessId::current(),
            "🌐 Customer API listening on http://{}",
            bind_address
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<ApiState> {
        &self.state
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Save the full collection. Failures are logged and returned; the
    /// in-memory collection is left as it is.
    pub async fn persist(&self, customers: &[Customer]) -> ApiResult<()> {
        self.persistence.save(customers).await.inspect_err(|e| {
            logging::log_error(ProcessId::current(), "Saving customers", e);
        })
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal"),
        Err(err) => {
            logging::log_error(ProcessId::current(), "Signal handling", &err);
            std::future::pending::<()>().await;
        }
    }
}
