//! Utility modules
//!
//! This module contains common utilities used throughout the crate,
//! including error handling, logging setup, event rules and helper functions.

pub mod errors;
pub mod events;
pub mod logging;
pub mod helpers;

pub use errors::{EventRsvpError, Result};
