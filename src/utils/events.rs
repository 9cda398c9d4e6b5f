//! Event rules
//!
//! Field validation for create and update requests, lifecycle status
//! derivation, and the ownership check used before modifying an event.

use chrono::{DateTime, Utc};

use crate::models::event::{CreateEventRequest, Event, EventStatus, UpdateEventRequest};

pub const MIN_TITLE_LENGTH: usize = 3;
pub const MIN_ATTENDEES: i32 = 1;

/// The subset of event fields that carry constraints.
///
/// Fields left as `None` are not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventFields<'a> {
    pub title: Option<&'a str>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub max_attendees: Option<i32>,
}

impl<'a> From<&'a CreateEventRequest> for EventFields<'a> {
    fn from(request: &'a CreateEventRequest) -> Self {
        Self {
            title: Some(&request.title),
            start_time: Some(request.start_time),
            end_time: Some(request.end_time),
            max_attendees: Some(request.max_attendees),
        }
    }
}

impl<'a> From<&'a UpdateEventRequest> for EventFields<'a> {
    fn from(request: &'a UpdateEventRequest) -> Self {
        Self {
            title: request.title.as_deref(),
            start_time: request.start_time,
            end_time: request.end_time,
            max_attendees: request.max_attendees,
        }
    }
}

/// Check event fields, returning every violated constraint in a fixed order.
/// An empty list means the fields are valid.
pub fn validate_event<'a>(fields: impl Into<EventFields<'a>>) -> Vec<String> {
    let fields = fields.into();
    let mut errors = Vec::new();

    if let Some(title) = fields.title {
        if title.chars().count() < MIN_TITLE_LENGTH {
            errors.push(format!("Title must be at least {} characters long", MIN_TITLE_LENGTH));
        }
    }

    if let (Some(start), Some(end)) = (fields.start_time, fields.end_time) {
        if start >= end {
            errors.push("End time must be after start time".to_string());
        }
    }

    if let Some(max_attendees) = fields.max_attendees {
        if max_attendees < MIN_ATTENDEES {
            errors.push(format!("Maximum attendees must be at least {}", MIN_ATTENDEES));
        }
    }

    errors
}

/// Lifecycle status of a time window relative to `now`. Never yields `Cancelled`.
pub fn calculate_event_status_at(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> EventStatus {
    if now < start_time {
        EventStatus::Upcoming
    } else if now <= end_time {
        EventStatus::Ongoing
    } else {
        EventStatus::Completed
    }
}

/// Lifecycle status of an event against the wall clock
pub fn calculate_event_status(event: &Event) -> EventStatus {
    calculate_event_status_at(event.start_time, event.end_time, Utc::now())
}

pub fn can_modify_event(event: &Event, user_id: &str) -> bool {
    event.created_by == user_id
}
