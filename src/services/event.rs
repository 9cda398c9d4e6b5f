//! Event service implementation
//!
//! This service handles event creation, updates and deletion, RSVP submission
//! with capacity enforcement, and attendance statistics.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::event::{CreateEventRequest, Event, EventStats, EventStatus, UpdateEventRequest, UserEvent};
use crate::models::rsvp::{EventRsvp, RsvpStatus, RsvpUpdateResponse};
use crate::services::auth::AuthService;
use crate::store::EventStore;
use crate::utils::errors::{EventRsvpError, Result};
use crate::utils::events::{calculate_event_status, calculate_event_status_at, can_modify_event, validate_event, EventFields};
use crate::utils::helpers::generate_uuid;
use crate::utils::logging::{log_event_action, log_rejection, log_rsvp_action, log_store_read};

/// Event service for managing events and RSVPs
#[derive(Clone)]
pub struct EventService {
    store: Arc<RwLock<EventStore>>,
    auth_service: AuthService,
}

impl EventService {
    /// Create a new EventService over the given store
    pub fn new(store: EventStore, auth_service: AuthService) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            auth_service,
        }
    }

    /// Create a new event owned by the current user
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        debug!(title = %request.title, "Creating new event");

        let user = self.auth_service.require_user().map_err(|e| {
            log_rejection("create_event", None, &e);
            e
        })?;

        let errors = validate_event(&request);
        if !errors.is_empty() {
            let err = EventRsvpError::ValidationFailed(errors);
            log_rejection("create_event", None, &err);
            return Err(err);
        }

        let now = Utc::now();
        let event = Event {
            id: generate_uuid(),
            status: calculate_event_status_at(request.start_time, request.end_time, now),
            title: request.title,
            description: request.description,
            location: request.location,
            start_time: request.start_time,
            end_time: request.end_time,
            max_attendees: request.max_attendees,
            created_by: user.id.clone(),
            created_at: now,
            updated_at: now,
            category: request.category,
            image_url: request.image_url,
            price: request.price,
            requirements: request.requirements,
        };

        self.store.write().await.insert_event(event.clone());
        log_event_action(&event.id, "create", &user.id, None);

        Ok(event)
    }

    /// Get all events in insertion order
    pub async fn get_events(&self) -> Vec<Event> {
        let store = self.store.read().await;
        log_store_read("get_events", None, store.events().len());
        store.events().to_vec()
    }

    /// Get an event by ID
    pub async fn get_event_by_id(&self, id: &str) -> Option<Event> {
        self.store.read().await.find_event(id).cloned()
    }

    /// Get every event paired with the user's RSVP status and organizer flag
    pub async fn get_user_events(&self, user_id: &str) -> Vec<UserEvent> {
        let store = self.store.read().await;
        store
            .events()
            .iter()
            .map(|event| UserEvent {
                rsvp_status: store
                    .find_rsvp(&event.id, user_id)
                    .map(|rsvp| rsvp.status)
                    .unwrap_or(RsvpStatus::No),
                is_organizer: can_modify_event(event, user_id),
                event: event.clone(),
            })
            .collect()
    }

    /// Get every RSVP recorded for an event, in the order they were first made
    pub async fn get_event_rsvps(&self, event_id: &str) -> Vec<EventRsvp> {
        let store = self.store.read().await;
        let rsvps: Vec<EventRsvp> = store.rsvps_for_event(event_id).cloned().collect();
        log_store_read("get_event_rsvps", Some(event_id), rsvps.len());
        rsvps
    }

    /// Aggregate the RSVPs of an event by status
    pub async fn get_event_stats(&self, event_id: &str) -> EventStats {
        let store = self.store.read().await;

        let mut stats = EventStats::default();
        for rsvp in store.rsvps_for_event(event_id) {
            stats.total_rsvps += 1;
            match rsvp.status {
                RsvpStatus::Yes => stats.confirmed += 1,
                RsvpStatus::No => stats.declined += 1,
                RsvpStatus::Maybe => stats.maybe += 1,
            }
        }

        stats.available_spots = store
            .find_event(event_id)
            .and_then(Event::capacity)
            .map(|capacity| i64::from(capacity) - stats.confirmed as i64);

        stats
    }

    /// Update an event created by the current user
    pub async fn update_event(&self, id: &str, request: UpdateEventRequest) -> Result<Event> {
        debug!(event_id = %id, "Updating event");
        let mut store = self.store.write().await;

        let result = self.prepare_update(&store, id, request);
        let event = match result {
            Ok(event) => event,
            Err(e) => {
                log_rejection("update_event", Some(id), &e);
                return Err(e);
            }
        };

        store.replace_event(event.clone());
        log_event_action(id, "update", &event.created_by, Some(&event.status.to_string()));

        Ok(event)
    }

    fn prepare_update(&self, store: &EventStore, id: &str, request: UpdateEventRequest) -> Result<Event> {
        let existing = store
            .find_event(id)
            .ok_or_else(|| EventRsvpError::EventNotFound { event_id: id.to_string() })?;
        self.require_organizer(existing)?;

        let errors = validate_event(&request);
        if !errors.is_empty() {
            return Err(EventRsvpError::ValidationFailed(errors));
        }

        let touches_times = request.start_time.is_some() || request.end_time.is_some();
        let explicit_status = request.status;

        let mut event = existing.clone();
        event.apply_update(request);

        // A one-sided time change must still leave a valid window
        if touches_times {
            let errors = validate_event(EventFields {
                start_time: Some(event.start_time),
                end_time: Some(event.end_time),
                ..Default::default()
            });
            if !errors.is_empty() {
                return Err(EventRsvpError::ValidationFailed(errors));
            }
        }

        event.updated_at = Utc::now();
        // Only cancellation is stored as given; any other status follows the clock
        event.status = match explicit_status {
            Some(EventStatus::Cancelled) => EventStatus::Cancelled,
            Some(_) => calculate_event_status(&event),
            None if existing.status == EventStatus::Cancelled => EventStatus::Cancelled,
            None => calculate_event_status(&event),
        };

        Ok(event)
    }

    /// Delete an event created by the current user
    pub async fn delete_event(&self, id: &str) -> Result<bool> {
        debug!(event_id = %id, "Deleting event");
        let mut store = self.store.write().await;

        let authorized = store
            .find_event(id)
            .ok_or_else(|| EventRsvpError::EventNotFound { event_id: id.to_string() })
            .and_then(|event| self.require_organizer(event));

        let user_id = match authorized {
            Ok(user_id) => user_id,
            Err(e) => {
                log_rejection("delete_event", Some(id), &e);
                return Err(e);
            }
        };

        let removed = store.remove_event(id).is_some();
        log_event_action(id, "delete", &user_id, None);

        Ok(removed)
    }

    /// Record the current user's RSVP for an event.
    ///
    /// The capacity check and the write happen under one write guard.
    pub async fn update_rsvp(&self, event_id: &str, status: RsvpStatus) -> Result<RsvpStatus> {
        debug!(event_id = %event_id, status = %status, "Updating RSVP");

        let user = self.auth_service.require_user().map_err(|e| {
            log_rejection("update_rsvp", Some(event_id), &e);
            e
        })?;

        let mut store = self.store.write().await;

        let capacity = match store.find_event(event_id) {
            Some(event) => event.capacity(),
            None => {
                let err = EventRsvpError::EventNotFound { event_id: event_id.to_string() };
                log_rejection("update_rsvp", Some(event_id), &err);
                return Err(err);
            }
        };

        if let (RsvpStatus::Yes, Some(max_attendees)) = (status, capacity) {
            let confirmed = store.count_rsvps(event_id, RsvpStatus::Yes);
            if confirmed >= max_attendees as usize {
                let err = EventRsvpError::MaxAttendeesReached {
                    event_id: event_id.to_string(),
                    max_attendees,
                };
                log_rejection("update_rsvp", Some(event_id), &err);
                return Err(err);
            }
        }

        let (rsvp, created) = store.upsert_rsvp(event_id, &user.id, status, Utc::now());
        log_rsvp_action(event_id, &user.id, rsvp.status, created);

        Ok(rsvp.status)
    }

    /// Submit an RSVP given as a raw status string, reporting the outcome as
    /// a response object instead of an error
    pub async fn submit_rsvp(&self, event_id: &str, status: &str) -> RsvpUpdateResponse {
        let result = match status.parse::<RsvpStatus>() {
            Ok(status) => self.update_rsvp(event_id, status).await,
            Err(e) => {
                log_rejection("submit_rsvp", Some(event_id), &e);
                Err(e)
            }
        };
        RsvpUpdateResponse::from(result)
    }

    fn require_organizer(&self, event: &Event) -> Result<String> {
        match self.auth_service.get_current_user() {
            Some(user) if can_modify_event(event, &user.id) => Ok(user.id),
            _ => Err(EventRsvpError::Unauthorized { event_id: event.id.clone() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::models::event::EventCategory;
    use crate::models::rsvp::RsvpErrorCode;
    use crate::models::User;

    fn signed_in(user_id: &str) -> (EventService, AuthService) {
        let auth = AuthService::new();
        auth.set_current_user(User::new(user_id, "Test User", "test@example.com"));
        (EventService::new(EventStore::with_demo_data(Utc::now()), auth.clone()), auth)
    }

    fn request(max_attendees: i32) -> CreateEventRequest {
        let start = Utc::now() + Duration::days(1);
        CreateEventRequest {
            title: "Board Game Night".to_string(),
            description: "Bring your favourite games.".to_string(),
            location: "Library Room B".to_string(),
            start_time: start,
            end_time: start + Duration::hours(3),
            max_attendees,
            category: EventCategory::Gaming,
            image_url: None,
            price: None,
            requirements: None,
        }
    }

    #[tokio::test]
    async fn test_create_event_assigns_owner_and_status() {
        let (service, _) = signed_in("user123");
        let event = service.create_event(request(8)).await.unwrap();

        assert_eq!(event.created_by, "user123");
        assert_eq!(event.status, EventStatus::Upcoming);
        assert_eq!(event.created_at, event.updated_at);
        assert_eq!(service.get_event_by_id(&event.id).await, Some(event.clone()));
        assert_eq!(service.get_events().await.last().map(|e| e.id.clone()), Some(event.id));
    }

    #[tokio::test]
    async fn test_create_event_requires_user() {
        let (service, auth) = signed_in("user123");
        auth.clear_current_user();
        assert!(matches!(service.create_event(request(8)).await, Err(EventRsvpError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_stats_for_unknown_event() {
        let (service, _) = signed_in("user123");
        let stats = service.get_event_stats("nope").await;
        assert_eq!(stats, EventStats::default());
        assert!(stats.available_spots.is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_cancelled_status() {
        let (service, _) = signed_in("1");
        let cancelled = service
            .update_event("1", UpdateEventRequest {
                status: Some(EventStatus::Cancelled),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(cancelled.status, EventStatus::Cancelled);

        let moved = service
            .update_event("1", UpdateEventRequest {
                start_time: Some(Utc::now() + Duration::days(2)),
                end_time: Some(Utc::now() + Duration::days(2) + Duration::hours(1)),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(moved.status, EventStatus::Cancelled);

        let reopened = service
            .update_event("1", UpdateEventRequest {
                status: Some(EventStatus::Upcoming),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(reopened.status, EventStatus::Upcoming);
    }

    #[tokio::test]
    async fn test_explicit_lifecycle_status_follows_clock() {
        let (service, _) = signed_in("user123");
        let event = service.create_event(request(8)).await.unwrap();

        let forced = service
            .update_event(&event.id, UpdateEventRequest {
                status: Some(EventStatus::Completed),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(forced.status, EventStatus::Upcoming);

        let renamed = service
            .update_event(&event.id, UpdateEventRequest {
                title: Some("Board Game Marathon".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(renamed.status, EventStatus::Upcoming);
    }

    #[tokio::test]
    async fn test_uncancel_rederives_from_times() {
        let (service, _) = signed_in("user123");
        let start = Utc::now() - Duration::days(3);
        let event = service
            .create_event(CreateEventRequest {
                start_time: start,
                end_time: start + Duration::hours(2),
                ..request(8)
            })
            .await
            .unwrap();
        assert_eq!(event.status, EventStatus::Completed);

        service
            .update_event(&event.id, UpdateEventRequest {
                status: Some(EventStatus::Cancelled),
                ..Default::default()
            })
            .await
            .unwrap();

        let reopened = service
            .update_event(&event.id, UpdateEventRequest {
                status: Some(EventStatus::Upcoming),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(reopened.status, EventStatus::Completed);
    }

    #[tokio::test]
    async fn test_event_without_capacity_is_unbounded() {
        let mut store = EventStore::with_demo_data(Utc::now());
        let mut open = store.find_event("1").cloned().unwrap();
        open.id = "open".to_string();
        open.max_attendees = 0;
        store.insert_event(open);

        let auth = AuthService::new();
        let service = EventService::new(store, auth.clone());

        for i in 0..5 {
            auth.set_current_user(User::new(format!("guest{}", i), "Guest", "guest@example.com"));
            assert_eq!(service.update_rsvp("open", RsvpStatus::Yes).await.unwrap(), RsvpStatus::Yes);
            // A repeat Yes is never capped either
            assert_eq!(service.update_rsvp("open", RsvpStatus::Yes).await.unwrap(), RsvpStatus::Yes);
        }

        let stats = service.get_event_stats("open").await;
        assert_eq!(stats.confirmed, 5);
        assert_eq!(stats.total_rsvps, 5);
        assert_eq!(stats.available_spots, None);
    }

    #[tokio::test]
    async fn test_available_spots_can_go_negative() {
        let (service, auth) = signed_in("user123");
        let event = service.create_event(request(3)).await.unwrap();
        for i in 0..3 {
            auth.set_current_user(User::new(format!("guest{}", i), "Guest", "guest@example.com"));
            service.update_rsvp(&event.id, RsvpStatus::Yes).await.unwrap();
        }

        auth.set_current_user(User::new("user123", "Test User", "test@example.com"));
        service
            .update_event(&event.id, UpdateEventRequest {
                max_attendees: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(service.get_event_stats(&event.id).await.available_spots, Some(-2));
    }

    #[tokio::test]
    async fn test_update_rejects_one_sided_inverted_window() {
        let (service, _) = signed_in("1");
        let before = service.get_event_by_id("1").await.unwrap();

        let result = service
            .update_event("1", UpdateEventRequest {
                end_time: Some(before.start_time - Duration::hours(1)),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(EventRsvpError::ValidationFailed(_))));
        assert_eq!(service.get_event_by_id("1").await, Some(before));
    }

    #[tokio::test]
    async fn test_submit_rsvp_invalid_status() {
        let (service, _) = signed_in("user123");
        let response = service.submit_rsvp("1", "Perhaps").await;
        assert!(!response.success);
        assert_eq!(response.error_code(), Some(RsvpErrorCode::InvalidStatus));

        let lowercase = service.submit_rsvp("1", "yes").await;
        assert_eq!(lowercase.error_code(), Some(RsvpErrorCode::InvalidStatus));
        assert_eq!(service.get_user_events("user123").await[0].rsvp_status, RsvpStatus::No);
    }
}
