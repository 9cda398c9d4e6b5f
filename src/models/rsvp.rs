//! RSVP model and the RSVP update response

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::utils::errors::{EventRsvpError, Result};

/// A user's attendance response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RsvpStatus {
    Yes,
    No,
    Maybe,
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RsvpStatus::Yes => "Yes",
            RsvpStatus::No => "No",
            RsvpStatus::Maybe => "Maybe",
        };
        f.write_str(s)
    }
}

impl FromStr for RsvpStatus {
    type Err = EventRsvpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Yes" => Ok(RsvpStatus::Yes),
            "No" => Ok(RsvpStatus::No),
            "Maybe" => Ok(RsvpStatus::Maybe),
            _ => Err(EventRsvpError::InvalidStatus(s.to_string())),
        }
    }
}

/// Button-level action a user takes on an invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpAction {
    Accept,
    Decline,
    Maybe,
}

impl RsvpAction {
    pub fn rsvp_status(self) -> RsvpStatus {
        match self {
            RsvpAction::Accept => RsvpStatus::Yes,
            RsvpAction::Decline => RsvpStatus::No,
            RsvpAction::Maybe => RsvpStatus::Maybe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRsvp {
    pub event_id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub status: RsvpStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl EventRsvp {
    /// New RSVP with `created_at == updated_at == now`
    pub fn new(event_id: impl Into<String>, user_id: impl Into<String>, status: RsvpStatus) -> Self {
        let now = Utc::now();
        Self {
            event_id: event_id.into(),
            user_id: user_id.into(),
            name: None,
            status,
            created_at: now,
            updated_at: now,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RsvpErrorCode {
    MaxAttendeesReached,
    EventNotFound,
    UserNotFound,
    InvalidStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpFailure {
    pub code: RsvpErrorCode,
    pub message: String,
}

/// Result-object form of an RSVP submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpUpdateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<RsvpFailure>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rsvp_status: Option<RsvpStatus>,
}

impl RsvpUpdateResponse {
    pub fn accepted(status: RsvpStatus) -> Self {
        Self {
            success: true,
            error: None,
            rsvp_status: Some(status),
        }
    }

    pub fn rejected(code: RsvpErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(RsvpFailure {
                code,
                message: message.into(),
            }),
            rsvp_status: None,
        }
    }

    /// Error code of a rejected submission
    pub fn error_code(&self) -> Option<RsvpErrorCode> {
        self.error.as_ref().map(|e| e.code)
    }
}

impl From<Result<RsvpStatus>> for RsvpUpdateResponse {
    fn from(result: Result<RsvpStatus>) -> Self {
        match result {
            Ok(status) => RsvpUpdateResponse::accepted(status),
            Err(err) => {
                let message = match &err {
                    EventRsvpError::Unauthenticated => "User must be authenticated to update RSVP".to_string(),
                    EventRsvpError::EventNotFound { .. } => "Event not found".to_string(),
                    EventRsvpError::MaxAttendeesReached { .. } => "Event is full".to_string(),
                    other => other.to_string(),
                };
                // Anything else escaping an RSVP submission is reported against the status input
                let code = err.rsvp_error_code().unwrap_or(RsvpErrorCode::InvalidStatus);
                RsvpUpdateResponse::rejected(code, message)
            }
        }
    }
}
