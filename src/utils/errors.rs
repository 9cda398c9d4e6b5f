//! Error handling for the event RSVP service
//!
//! This module defines the main error type used throughout the crate
//! and the mapping from errors to the RSVP response codes.

use thiserror::Error;

use crate::models::rsvp::RsvpErrorCode;

/// Main error type for event and RSVP operations
#[derive(Error, Debug)]
pub enum EventRsvpError {
    #[error("User must be authenticated")]
    Unauthenticated,

    #[error("Unauthorized to modify event {event_id}")]
    Unauthorized { event_id: String },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Invalid event data: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),

    #[error("Event {event_id} is full ({max_attendees} attendees)")]
    MaxAttendeesReached { event_id: String, max_attendees: i32 },

    #[error("Invalid RSVP status: {0}")]
    InvalidStatus(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for event RSVP operations
pub type Result<T> = std::result::Result<T, EventRsvpError>;

impl EventRsvpError {
    /// Map the error onto the code carried by an RSVP update response.
    ///
    /// Errors that cannot come out of an RSVP submission return `None`.
    pub fn rsvp_error_code(&self) -> Option<RsvpErrorCode> {
        match self {
            EventRsvpError::Unauthenticated => Some(RsvpErrorCode::UserNotFound),
            EventRsvpError::EventNotFound { .. } => Some(RsvpErrorCode::EventNotFound),
            EventRsvpError::MaxAttendeesReached { .. } => Some(RsvpErrorCode::MaxAttendeesReached),
            EventRsvpError::InvalidStatus(_) => Some(RsvpErrorCode::InvalidStatus),
            _ => None,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventRsvpError::Config(_) | EventRsvpError::ConfigLoad(_) => ErrorSeverity::Critical,
            EventRsvpError::Unauthenticated | EventRsvpError::Unauthorized { .. } => ErrorSeverity::Warning,
            EventRsvpError::ValidationFailed(_)
            | EventRsvpError::InvalidStatus(_)
            | EventRsvpError::MaxAttendeesReached { .. }
            | EventRsvpError::EventNotFound { .. } => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
