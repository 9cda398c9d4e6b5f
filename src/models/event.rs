//! Event model

use std::fmt;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use super::rsvp::RsvpStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub max_attendees: i32,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: EventStatus,
    pub category: EventCategory,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub requirements: Option<Vec<String>>,
}

impl Event {
    /// Seat limit for confirmed attendees, if the event has one
    pub fn capacity(&self) -> Option<i32> {
        (self.max_attendees > 0).then_some(self.max_attendees)
    }

    /// Merge the supplied fields into the event. Absent fields are kept;
    /// timestamps and derived status are left to the caller.
    pub fn apply_update(&mut self, request: UpdateEventRequest) {
        let UpdateEventRequest {
            title,
            description,
            location,
            start_time,
            end_time,
            max_attendees,
            status,
            category,
            image_url,
            price,
            requirements,
        } = request;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(start_time) = start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = end_time {
            self.end_time = end_time;
        }
        if let Some(max_attendees) = max_attendees {
            self.max_attendees = max_attendees;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if image_url.is_some() {
            self.image_url = image_url;
        }
        if price.is_some() {
            self.price = price;
        }
        if requirements.is_some() {
            self.requirements = requirements;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Sports,
    Gaming,
    Social,
    Other,
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventCategory::Sports => "sports",
            EventCategory::Gaming => "gaming",
            EventCategory::Social => "social",
            EventCategory::Other => "other",
        };
        f.write_str(s)
    }
}

/// Fields supplied by the caller when creating an event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub max_attendees: i32,
    pub category: EventCategory,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub requirements: Option<Vec<String>>,
}

/// Partial update of an event; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub max_attendees: Option<i32>,
    pub status: Option<EventStatus>,
    pub category: Option<EventCategory>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub requirements: Option<Vec<String>>,
}

/// Aggregate attendance figures for one event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub total_rsvps: usize,
    pub confirmed: usize,
    pub declined: usize,
    pub maybe: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub available_spots: Option<i64>,
}

/// An event as seen by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    pub event: Event,
    pub rsvp_status: RsvpStatus,
    pub is_organizer: bool,
}
