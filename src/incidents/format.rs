// src/incidents/format.rs
// Pure message templating. No I/O; same incident in, same text out.

use chrono::{DateTime, Datelike, Utc};

use crate::incidents::freshness::parse_feed_timestamp;
use crate::incidents::types::{BusIncident, ElevatorIncident, Incident, RailIncident};

/// Hard cap on published post length.
pub const MAX_MESSAGE_LENGTH: usize = 500;

const ELLIPSIS: &str = "...";

/// Render one incident as alert text, bounded to [`MAX_MESSAGE_LENGTH`].
pub fn format_alert(incident: &Incident) -> String {
    let message = match incident {
        Incident::Rail(rail) => format_rail(rail),
        Incident::Bus(bus) => format_bus(bus),
        Incident::Elevator(unit) => format_elevator(unit),
    };
    truncate_message(message)
}

/// Cap `message` at [`MAX_MESSAGE_LENGTH`] characters; over-long text keeps
/// the first 497 characters and ends with `...`, total exactly 500.
pub fn truncate_message(message: String) -> String {
    if message.chars().count() <= MAX_MESSAGE_LENGTH {
        return message;
    }
    let kept: String = message
        .chars()
        .take(MAX_MESSAGE_LENGTH - ELLIPSIS.len())
        .collect();
    format!("{kept}{ELLIPSIS}")
}

fn format_rail(incident: &RailIncident) -> String {
    let mut message = format!(
        "🚇 Rail Alert: {}",
        incident.description.as_deref().unwrap_or_default()
    );
    if let Some(lines) = incident.lines_affected.as_deref().filter(|s| !s.is_empty()) {
        message.push_str(&format!("\nLines affected: {lines}"));
    }
    message
}

fn format_bus(incident: &BusIncident) -> String {
    let mut message = format!(
        "🚌 Bus Alert: {}",
        incident.description.as_deref().unwrap_or_default()
    );
    if !incident.routes_affected.is_empty() {
        message.push_str(&format!(
            "\nRoutes affected: {}",
            incident.routes_affected.join(", ")
        ));
    }
    message
}

fn format_elevator(incident: &ElevatorIncident) -> String {
    let mut message = format!(
        "🛗 {} Alert at {}: {}",
        incident.unit_type,
        incident.station_name.as_deref().unwrap_or_default(),
        incident.symptom_description.as_deref().unwrap_or_default()
    );
    // Only rendered when the feed's estimate is present and parseable.
    if let Some(eta) = incident
        .estimated_return_to_service
        .as_deref()
        .and_then(parse_feed_timestamp)
    {
        message.push_str(&format!(
            "\nEstimated return to service: {}",
            long_date(eta)
        ));
    }
    message
}

/// Long human-readable form, e.g. "April 5th, 2024 at 3:45 PM".
fn long_date(ts: DateTime<Utc>) -> String {
    let day = ts.day();
    format!(
        "{} {}{}, {} at {}",
        ts.format("%B"),
        day,
        ordinal_suffix(day),
        ts.year(),
        ts.format("%-I:%M %p")
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
