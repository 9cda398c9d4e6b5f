//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for event and RSVP operations.

use tracing::{info, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::models::rsvp::RsvpStatus;
use crate::utils::errors::{EventRsvpError, Result};

/// Initialize logging based on configuration.
///
/// When a log directory is configured the returned guard must be held for
/// the lifetime of the process, otherwise buffered file output is lost.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let stdout_layer = if config.json {
        fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "event-rsvp.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .with(EnvFilter::new(&config.level))
        .try_init()
        .map_err(|e| EventRsvpError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log event management actions
pub fn log_event_action(event_id: &str, action: &str, user_id: &str, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        user_id = user_id,
        details = details,
        "Event action performed"
    );
}

/// Log an accepted RSVP
pub fn log_rsvp_action(event_id: &str, user_id: &str, status: RsvpStatus, created: bool) {
    info!(
        event_id = event_id,
        user_id = user_id,
        status = %status,
        created = created,
        "RSVP recorded"
    );
}

/// Log a rejected operation with the reason
pub fn log_rejection(operation: &str, event_id: Option<&str>, err: &EventRsvpError) {
    error!(
        operation = operation,
        event_id = event_id,
        severity = %err.severity(),
        error = %err,
        "Operation rejected"
    );
}

/// Log store reads
pub fn log_store_read(operation: &str, event_id: Option<&str>, found: usize) {
    debug!(
        operation = operation,
        event_id = event_id,
        found = found,
        "Store read completed"
    );
}
