//! Test helpers module
//!
//! Shared setup for the integration tests: a fresh service context per test
//! and generators for users and event requests.

#![allow(dead_code)]

use std::sync::Once;

use chrono::{Duration, Utc};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;

use event_rsvp::models::{CreateEventRequest, EventCategory, User};
use event_rsvp::utils::helpers::generate_uuid;
use event_rsvp::{AuthService, EventService, EventStore};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// A service over its own store, with a handle on the shared auth slot
pub struct TestContext {
    pub auth: AuthService,
    pub events: EventService,
}

impl TestContext {
    /// Fresh context over an empty store with nobody signed in
    pub fn empty() -> Self {
        Self::with_store(EventStore::new())
    }

    /// Fresh context over the demo data with nobody signed in
    pub fn seeded() -> Self {
        Self::with_store(EventStore::with_demo_data(Utc::now()))
    }

    fn with_store(store: EventStore) -> Self {
        init_test_env();
        let auth = AuthService::new();
        let events = EventService::new(store, auth.clone());
        Self { auth, events }
    }

    /// Sign in a freshly generated user and return it
    pub fn sign_in_new_user(&self) -> User {
        let user = fake_user();
        self.auth.set_current_user(user.clone());
        user
    }

    pub fn sign_in(&self, user: &User) {
        self.auth.set_current_user(user.clone());
    }
}

/// Generate a user with a random id, name and email
pub fn fake_user() -> User {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    User::new(generate_uuid(), name, email)
}

/// A valid event request starting tomorrow
pub fn event_request(title: &str, max_attendees: i32) -> CreateEventRequest {
    let start = Utc::now() + Duration::days(1);
    CreateEventRequest {
        title: title.to_string(),
        description: "Integration test event".to_string(),
        location: "Test Venue".to_string(),
        start_time: start,
        end_time: start + Duration::hours(2),
        max_attendees,
        category: EventCategory::Other,
        image_url: None,
        price: None,
        requirements: None,
    }
}
