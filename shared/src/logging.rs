//! Shared logging utilities for consistent tracing across the service

use crate::errors::{SharedError, SharedResult};
use crate::types::ProcessId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Check a user supplied log level, returning it lowercased
pub fn validate_log_level(level: &str) -> SharedResult<String> {
    let normalized = level.trim().to_lowercase();
    if LOG_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(SharedError::InvalidConfig {
            field: "log_level".to_string(),
            value: level.to_string(),
        })
    }
}

/// Build the per-crate filter directive for the current process
pub fn filter_directive(process_id: &ProcessId, base_level: &str) -> String {
    match process_id {
        ProcessId::CustomerApi => {
            format!("customer_api={base_level},shared={base_level},tower_http={base_level},axum={base_level}")
        }
        ProcessId::Unregistered => base_level.to_string(),
    }
}

/// Initialize the stdout tracing subscriber with an optional log level.
///
/// Uses the global process ID, so call `ProcessId::init_*` first. Falls back
/// to `info` when the level is not recognised.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = match log_level.map(validate_log_level) {
        Some(Ok(level)) => level,
        Some(Err(e)) => {
            eprintln!("{e}, using info");
            "info".to_string()
        }
        None => "info".to_string(),
    };

    let directive = filter_directive(ProcessId::current(), &base_level);

    // A subscriber may already be installed (tests), keep the first one
    let _ = fmt()
        .with_env_filter(EnvFilter::new(&directive))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for process-aware info logging
#[macro_export]
macro_rules! process_info {
    ($process_id:expr, $($arg:tt)*) => {
        tracing::info!(
            process = %$process_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for process-aware warning logging
#[macro_export]
macro_rules! process_warn {
    ($process_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            process = %$process_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for process-aware error logging
#[macro_export]
macro_rules! process_error {
    ($process_id:expr, $($arg:tt)*) => {
        tracing::error!(
            process = %$process_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for process-aware debug logging
#[macro_export]
macro_rules! process_debug {
    ($process_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            process = %$process_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(process_id: &ProcessId, details: &str) {
    info!(
        process = %process_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(process_id: &ProcessId, reason: &str) {
    info!(
        process = %process_id,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(process_id: &ProcessId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        process = %process_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(process_id: &ProcessId, message: &str) {
    info!(
        process = %process_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
