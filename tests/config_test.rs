//! Configuration loading tests
//!
//! These tests touch process environment variables, so they run serially.

use std::fs;

use serial_test::serial;

use event_rsvp::{EventRsvpError, ServiceFactory, Settings};

const LEVEL_VAR: &str = "EVENT_RSVP__LOGGING__LEVEL";
const SEED_VAR: &str = "EVENT_RSVP__DEMO__SEED_DEMO_DATA";

fn clear_env() {
    std::env::remove_var(LEVEL_VAR);
    std::env::remove_var(SEED_VAR);
}

#[test]
#[serial]
fn test_load_from_file() {
    clear_env();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("event-rsvp.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "debug"
json = true

[demo]
seed_demo_data = false
current_user_id = "admin"
"#,
    )
    .expect("Failed to write config");

    let settings = Settings::from_file(&path).expect("Failed to load settings");
    assert_eq!(settings.logging.level, "debug");
    assert!(settings.logging.json);
    assert!(settings.logging.directory.is_none());
    assert!(!settings.demo.seed_demo_data);
    assert_eq!(settings.demo.current_user_id.as_deref(), Some("admin"));
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("event-rsvp.toml");
    fs::write(&path, "[logging]\nlevel = \"warn\"\n").expect("Failed to write config");

    std::env::set_var(LEVEL_VAR, "error");
    std::env::set_var(SEED_VAR, "false");
    let settings = Settings::from_file(&path);
    clear_env();

    let settings = settings.expect("Failed to load settings");
    assert_eq!(settings.logging.level, "error");
    assert!(!settings.demo.seed_demo_data);
    // Untouched sections keep their defaults
    assert_eq!(settings.demo.current_user_id.as_deref(), Some("user123"));
}

#[test]
#[serial]
fn test_invalid_level_fails_validation() {
    clear_env();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("event-rsvp.toml");
    fs::write(&path, "[logging]\nlevel = \"loud\"\n").expect("Failed to write config");

    let settings = Settings::from_file(&path).expect("Failed to load settings");
    assert!(matches!(settings.validate(), Err(EventRsvpError::Config(_))));
}

#[test]
#[serial]
fn test_factory_from_loaded_settings() {
    clear_env();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("event-rsvp.toml");
    fs::write(&path, "[demo]\ncurrent_user_id = \"1\"\n").expect("Failed to write config");

    let settings = Settings::from_file(&path).expect("Failed to load settings");
    let services = ServiceFactory::new(&settings).expect("Failed to build services");

    assert_eq!(
        services.auth_service.get_current_user().map(|u| u.name),
        Some("Demo Organizer".to_string())
    );
    let events = tokio_test::block_on(services.event_service.get_user_events("1"));
    assert_eq!(events.iter().filter(|ue| ue.is_organizer).count(), 2);
}
