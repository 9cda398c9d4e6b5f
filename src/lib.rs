//! Event RSVP service
//!
//! An in-memory event and RSVP service. It lets a user create and manage
//! events, respond Yes/No/Maybe with capacity enforcement, and read
//! aggregate attendance statistics for an event.

pub mod config;
pub mod services;
pub mod models;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventRsvpError, Result};

// Re-export main components for easy access
pub use services::{AuthService, EventService, ServiceFactory};
pub use store::EventStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
