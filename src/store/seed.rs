//! Demo rows loaded into a fresh store

use chrono::{DateTime, Duration, Utc};

use crate::models::event::{Event, EventCategory, EventStatus};
use crate::models::rsvp::{EventRsvp, RsvpStatus};
use crate::models::user::User;

pub const CONFERENCE_EVENT_ID: &str = "3";

/// Users the demo can sign in as
pub fn demo_users() -> Vec<User> {
    vec![
        User::new("user123", "John Doe", "john@example.com")
            .with_avatar("https://i.pravatar.cc/150?img=57"),
        User::new("1", "Demo Organizer", "organizer@example.com"),
        User::new("admin", "Conference Admin", "admin@example.com"),
    ]
}

pub fn find_demo_user(id: &str) -> Option<User> {
    demo_users().into_iter().find(|user| user.id == id)
}

pub fn demo_events(now: DateTime<Utc>) -> Vec<Event> {
    vec![
        demo_event(
            "1",
            "Weekly Basketball Game",
            "Join us for our weekly basketball game at the local court.",
            "Local Community Center",
            now + Duration::days(7),
            Duration::hours(2),
            20,
            EventCategory::Sports,
            "1",
            now,
        ),
        demo_event(
            "2",
            "Soccer Tournament",
            "Annual soccer tournament for all skill levels.",
            "City Sports Complex",
            now + Duration::days(14),
            Duration::hours(6),
            100,
            EventCategory::Sports,
            "1",
            now,
        ),
        Event {
            image_url: Some("https://example.com/event-image.jpg".to_string()),
            ..demo_event(
                CONFERENCE_EVENT_ID,
                "Summer Tech Conference",
                "Join us for an exciting day of innovation and networking!",
                "Tech Hub, Downtown",
                now + Duration::days(30),
                Duration::hours(9),
                200,
                EventCategory::Social,
                "admin",
                now,
            )
        },
    ]
}

pub fn demo_rsvps(now: DateTime<Utc>) -> Vec<EventRsvp> {
    let mut rsvps = vec![
        demo_rsvp("1", "1", None, RsvpStatus::Yes, now),
        demo_rsvp("2", "1", None, RsvpStatus::Maybe, now),
    ];

    let friends = [
        ("f1", "Sarah Wilson", RsvpStatus::Yes),
        ("f2", "Michael Johnson", RsvpStatus::Maybe),
        ("f3", "Emily Davis", RsvpStatus::Yes),
        ("f4", "Chris Brown", RsvpStatus::No),
        ("f5", "Jessica Lee", RsvpStatus::Yes),
        ("f6", "Thomas Harris", RsvpStatus::Yes),
        ("f7", "Rachel Green", RsvpStatus::Maybe),
        ("f8", "Peter Parker", RsvpStatus::Yes),
    ];
    let attendees = [
        ("a1", "Alexandra Thompson"),
        ("a2", "Lisa Anderson"),
        ("a3", "David Miller"),
        ("a4", "Emma Wilson"),
        ("a5", "James Smith"),
        ("a6", "Sophie Turner"),
    ];

    rsvps.extend(
        friends
            .iter()
            .map(|&(id, name, status)| demo_rsvp(CONFERENCE_EVENT_ID, id, Some(name), status, now)),
    );
    rsvps.extend(
        attendees
            .iter()
            .map(|&(id, name)| demo_rsvp(CONFERENCE_EVENT_ID, id, Some(name), RsvpStatus::Yes, now)),
    );
    rsvps
}

#[allow(clippy::too_many_arguments)]
fn demo_event(
    id: &str,
    title: &str,
    description: &str,
    location: &str,
    start_time: DateTime<Utc>,
    length: Duration,
    max_attendees: i32,
    category: EventCategory,
    created_by: &str,
    now: DateTime<Utc>,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        start_time,
        end_time: start_time + length,
        max_attendees,
        created_by: created_by.to_string(),
        created_at: now,
        updated_at: now,
        status: EventStatus::Upcoming,
        category,
        image_url: None,
        price: None,
        requirements: None,
    }
}

fn demo_rsvp(
    event_id: &str,
    user_id: &str,
    name: Option<&str>,
    status: RsvpStatus,
    now: DateTime<Utc>,
) -> EventRsvp {
    EventRsvp {
        event_id: event_id.to_string(),
        user_id: user_id.to_string(),
        name: name.map(str::to_string),
        status,
        created_at: now,
        updated_at: now,
        notes: None,
    }
}
