//! Event RSVP demo
//!
//! Main application entry point. Usage: `event-rsvp [EVENT_ID] [Yes|No|Maybe]`

use anyhow::Context;
use tracing::{info, warn, error};

use event_rsvp::{
    config::Settings,
    services::ServiceFactory,
    store::seed::CONFERENCE_EVENT_ID,
    utils::{helpers, logging},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging; the guard flushes file output on drop
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", event_rsvp::info());

    let services = ServiceFactory::new(&settings)?;
    let events = services.event_service.clone();

    let mut args = std::env::args().skip(1);
    let event_id = args.next().unwrap_or_else(|| CONFERENCE_EVENT_ID.to_string());
    let status = args.next();

    let Some(event) = events.get_event_by_id(&event_id).await else {
        warn!(event_id = %event_id, "Event not found");
        return Ok(());
    };

    info!(
        event_id = %event.id,
        title = %event.title,
        location = %event.location,
        starts = %helpers::format_timestamp(event.start_time),
        status = %event.status,
        "Event details"
    );
    info!("{}", helpers::format_event_stats(&events.get_event_stats(&event.id).await));

    for rsvp in events.get_event_rsvps(&event.id).await {
        info!(
            user_id = %rsvp.user_id,
            name = rsvp.name.as_deref().unwrap_or("-"),
            status = %rsvp.status,
            "Attendee"
        );
    }

    if let Some(status) = status {
        let response = events.submit_rsvp(&event.id, &status).await;
        if response.success {
            info!(response = %serde_json::to_string(&response)?, "RSVP accepted");
            info!("{}", helpers::format_event_stats(&events.get_event_stats(&event.id).await));
        } else {
            error!(response = %serde_json::to_string(&response)?, "RSVP rejected");
        }
    }

    info!("Event RSVP demo finished.");
    Ok(())
}
