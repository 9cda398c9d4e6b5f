//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod event;

// Re-export commonly used services
pub use auth::AuthService;
pub use event::EventService;

use chrono::Utc;
use tracing::info;

use crate::config::settings::Settings;
use crate::store::{seed, EventStore};
use crate::utils::errors::{EventRsvpError, Result};

/// Service factory for creating and wiring all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub event_service: EventService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized.
    ///
    /// Seeds the store and signs in the configured demo user when the
    /// settings ask for it.
    pub fn new(settings: &Settings) -> Result<Self> {
        let auth_service = AuthService::new();

        if let Some(user_id) = &settings.demo.current_user_id {
            let user = seed::find_demo_user(user_id)
                .ok_or_else(|| EventRsvpError::Config(format!("Unknown demo user: {}", user_id)))?;
            auth_service.set_current_user(user);
        }

        let store = if settings.demo.seed_demo_data {
            info!("Loading demo data");
            EventStore::with_demo_data(Utc::now())
        } else {
            EventStore::new()
        };

        let event_service = EventService::new(store, auth_service.clone());

        Ok(Self {
            auth_service,
            event_service,
        })
    }
}
