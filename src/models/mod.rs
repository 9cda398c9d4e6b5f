//! Data models module
//!
//! This module contains all data structures used throughout the service

pub mod user;
pub mod event;
pub mod rsvp;

// Re-export commonly used models
pub use user::User;
pub use event::{Event, EventStatus, EventCategory, CreateEventRequest, UpdateEventRequest, EventStats, UserEvent};
pub use rsvp::{EventRsvp, RsvpStatus, RsvpAction, RsvpErrorCode, RsvpFailure, RsvpUpdateResponse};
