//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all settings are usable before the service starts.

use crate::utils::errors::{EventRsvpError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_logging_config(&settings.logging)?;
    validate_demo_config(&settings.demo)?;

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventRsvpError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventRsvpError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if let Some(directory) = &config.directory {
        if directory.trim().is_empty() {
            return Err(EventRsvpError::Config(
                "Log directory must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate demo configuration
fn validate_demo_config(config: &super::DemoConfig) -> Result<()> {
    if let Some(user_id) = &config.current_user_id {
        if user_id.trim().is_empty() {
            return Err(EventRsvpError::Config(
                "Current user id must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}
