//! In-memory event and RSVP store

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::event::Event;
use crate::models::rsvp::{EventRsvp, RsvpStatus};
use super::seed;

type RsvpKey = (String, String);

/// Owns every event and RSVP for the lifetime of the process.
///
/// Events keep insertion order. RSVPs are never removed, so each one keeps
/// the slot it was inserted at and is indexed by `(event_id, user_id)`.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    rsvps: Vec<EventRsvp>,
    rsvp_index: HashMap<RsvpKey, usize>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the demo events and RSVPs, timed relative to `now`
    pub fn with_demo_data(now: DateTime<Utc>) -> Self {
        let mut store = Self::new();
        for event in seed::demo_events(now) {
            store.insert_event(event);
        }
        for rsvp in seed::demo_rsvps(now) {
            store.insert_rsvp(rsvp);
        }
        store
    }

    pub fn insert_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn find_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn replace_event(&mut self, event: Event) -> bool {
        match self.events.iter_mut().find(|existing| existing.id == event.id) {
            Some(existing) => {
                *existing = event;
                true
            }
            None => false,
        }
    }

    /// Remove an event. Its RSVPs stay in the store.
    pub fn remove_event(&mut self, id: &str) -> Option<Event> {
        let index = self.events.iter().position(|event| event.id == id)?;
        Some(self.events.remove(index))
    }

    pub fn find_rsvp(&self, event_id: &str, user_id: &str) -> Option<&EventRsvp> {
        self.rsvp_index
            .get(&(event_id.to_string(), user_id.to_string()))
            .map(|&index| &self.rsvps[index])
    }

    /// Insert or overwrite the RSVP for `(event_id, user_id)`.
    ///
    /// Returns the stored record and whether it was newly created.
    pub fn upsert_rsvp(
        &mut self,
        event_id: &str,
        user_id: &str,
        status: RsvpStatus,
        now: DateTime<Utc>,
    ) -> (EventRsvp, bool) {
        let key = (event_id.to_string(), user_id.to_string());
        if let Some(&index) = self.rsvp_index.get(&key) {
            let rsvp = &mut self.rsvps[index];
            rsvp.status = status;
            rsvp.updated_at = now;
            return (rsvp.clone(), false);
        }

        let mut rsvp = EventRsvp::new(event_id, user_id, status);
        rsvp.created_at = now;
        rsvp.updated_at = now;
        self.insert_rsvp(rsvp.clone());
        (rsvp, true)
    }

    /// Insert a fully formed RSVP, replacing any existing one for the same pair
    pub fn insert_rsvp(&mut self, rsvp: EventRsvp) {
        let key = (rsvp.event_id.clone(), rsvp.user_id.clone());
        match self.rsvp_index.get(&key) {
            Some(&index) => self.rsvps[index] = rsvp,
            None => {
                self.rsvp_index.insert(key, self.rsvps.len());
                self.rsvps.push(rsvp);
            }
        }
    }

    pub fn rsvps_for_event<'a>(&'a self, event_id: &'a str) -> impl Iterator<Item = &'a EventRsvp> + 'a {
        self.rsvps.iter().filter(move |rsvp| rsvp.event_id == event_id)
    }

    pub fn count_rsvps(&self, event_id: &str, status: RsvpStatus) -> usize {
        self.rsvps_for_event(event_id)
            .filter(|rsvp| rsvp.status == status)
            .count()
    }

    pub fn rsvp_count(&self) -> usize {
        self.rsvps.len()
    }
}
