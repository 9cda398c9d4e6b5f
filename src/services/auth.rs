//! Authentication service implementation
//!
//! Holds the identity of the current user for the lifetime of the process.
//! There is no credential verification, session or expiry: the caller is
//! responsible for populating the slot.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, debug};

use crate::models::User;
use crate::utils::errors::{EventRsvpError, Result};

/// Current-user holder. Clones share the same slot.
#[derive(Clone, Default)]
pub struct AuthService {
    current_user: Arc<RwLock<Option<User>>>,
}

impl AuthService {
    /// Create a new AuthService with nobody signed in
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently signed-in user
    pub fn get_current_user(&self) -> Option<User> {
        self.current_user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Set the current user, replacing any previous one
    pub fn set_current_user(&self, user: User) {
        info!(user_id = %user.id, "Current user set");
        *self.current_user.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    /// Clear the current user (logout)
    pub fn clear_current_user(&self) {
        let previous = self
            .current_user
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(user) = previous {
            info!(user_id = %user.id, "Current user cleared");
        }
    }

    /// Check if a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.current_user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Get the current user or fail with `Unauthenticated`
    pub fn require_user(&self) -> Result<User> {
        let user = self.get_current_user();
        debug!(authenticated = user.is_some(), "Checking current user");
        user.ok_or(EventRsvpError::Unauthenticated)
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("current_user", &self.get_current_user().map(|u| u.id))
            .finish()
    }
}
