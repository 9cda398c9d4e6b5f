//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the crate.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::event::EventStats;

/// Generate a new UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Render event statistics as a one-line summary
pub fn format_event_stats(stats: &EventStats) -> String {
    let mut summary = format!(
        "Total RSVPs: {} ({} confirmed, {} declined, {} maybe)",
        stats.total_rsvps, stats.confirmed, stats.declined, stats.maybe
    );
    if let Some(spots) = stats.available_spots {
        summary.push_str(&format!(", {} spots available", spots));
    }
    summary
}
