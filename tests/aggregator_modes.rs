// tests/aggregator_modes.rs
// Aggregation over a mock feed source: per-incident ordering and the
// summary sentinel.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use transit_incident_notifier::error::FetchError;
use transit_incident_notifier::incidents::feed::IncidentSource;
use transit_incident_notifier::incidents::types::{
    BusIncident, ElevatorIncident, Incident, IncidentCategory, IncidentSnapshot, RailIncident,
    UnitType,
};
use transit_incident_notifier::incidents::IncidentAggregator;

struct MockSource {
    snapshot: IncidentSnapshot,
}

#[async_trait]
impl IncidentSource for MockSource {
    async fn fetch_all(&self) -> Result<IncidentSnapshot, FetchError> {
        Ok(self.snapshot.clone())
    }
}

fn rail(desc: &str, updated: &str) -> Incident {
    Incident::Rail(RailIncident {
        incident_id: None,
        incident_type: None,
        description: Some(desc.to_string()),
        lines_affected: None,
        date_updated: updated.to_string(),
    })
}

fn bus(desc: &str, updated: &str) -> Incident {
    Incident::Bus(BusIncident {
        incident_id: None,
        incident_type: None,
        description: Some(desc.to_string()),
        routes_affected: Vec::new(),
        date_updated: updated.to_string(),
    })
}

fn elevator(symptom: &str, updated: &str) -> Incident {
    Incident::Elevator(ElevatorIncident {
        unit_type: UnitType::Elevator,
        unit_name: None,
        station_code: None,
        station_name: Some("Metro Center".into()),
        location_description: None,
        symptom_description: Some(symptom.to_string()),
        date_out_of_serv: None,
        date_updated: updated.to_string(),
        estimated_return_to_service: None,
    })
}

// Fixed clock: cutoff lands at 15:40, so 15:41+ is fresh and 15:30 is stale.
fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 5, 15, 45, 20).unwrap()
}

async fn aggregator_with(snapshot: IncidentSnapshot) -> IncidentAggregator<MockSource> {
    let mut aggregator = IncidentAggregator::new(MockSource { snapshot });
    aggregator.refresh().await.expect("mock refresh");
    aggregator
}

#[tokio::test]
async fn per_incident_mode_orders_rail_bus_elevator() {
    let snapshot = IncidentSnapshot {
        rail: vec![
            rail("Red Line delay", "2024-04-05T15:41:00"),
            rail("Old rail news", "2024-04-05T15:30:00"),
        ],
        bus: vec![bus("Detour on H St", "2024-04-05T15:42:00")],
        elevator: vec![elevator("Out of service", "2024-04-05T15:43:00")],
    };
    let aggregator = aggregator_with(snapshot).await;

    let alerts = aggregator.formatted_alerts(fixed_now());
    let categories: Vec<IncidentCategory> = alerts.iter().map(|a| a.category).collect();
    assert_eq!(
        categories,
        vec![
            IncidentCategory::Rail,
            IncidentCategory::Bus,
            IncidentCategory::Elevator
        ]
    );
    assert_eq!(alerts[0].text, "🚇 Rail Alert: Red Line delay");
    assert_eq!(alerts[1].text, "🚌 Bus Alert: Detour on H St");
    assert_eq!(
        alerts[2].text,
        "🛗 Elevator Alert at Metro Center: Out of service"
    );
}

#[tokio::test]
async fn per_incident_mode_preserves_intra_category_order() {
    let snapshot = IncidentSnapshot {
        rail: vec![
            rail("first", "2024-04-05T15:41:00"),
            rail("second", "2024-04-05T15:42:00"),
            rail("third", "2024-04-05T15:43:00"),
        ],
        bus: Vec::new(),
        elevator: Vec::new(),
    };
    let aggregator = aggregator_with(snapshot).await;

    let alerts = aggregator.formatted_alerts(fixed_now());
    let texts: Vec<&str> = alerts.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "🚇 Rail Alert: first",
            "🚇 Rail Alert: second",
            "🚇 Rail Alert: third"
        ]
    );
}

#[tokio::test]
async fn summary_mode_joins_headlines() {
    let snapshot = IncidentSnapshot {
        rail: vec![rail("A", "2024-04-05T15:41:00")],
        bus: vec![bus("B", "2024-04-05T15:42:00")],
        elevator: Vec::new(),
    };
    let aggregator = aggregator_with(snapshot).await;

    assert_eq!(aggregator.summary(fixed_now()), Some("A | B".to_string()));
}

#[tokio::test]
async fn summary_mode_uses_symptom_for_elevator() {
    let snapshot = IncidentSnapshot {
        rail: Vec::new(),
        bus: Vec::new(),
        elevator: vec![elevator("Door fault", "2024-04-05T15:41:00")],
    };
    let aggregator = aggregator_with(snapshot).await;

    assert_eq!(aggregator.summary(fixed_now()), Some("Door fault".to_string()));
}

#[tokio::test]
async fn summary_mode_with_nothing_fresh_is_none() {
    let snapshot = IncidentSnapshot {
        rail: vec![rail("stale", "2024-04-05T12:00:00")],
        bus: Vec::new(),
        elevator: Vec::new(),
    };
    let aggregator = aggregator_with(snapshot).await;

    // Explicit nothing-to-publish sentinel, never Some("").
    assert_eq!(aggregator.summary(fixed_now()), None);
}

#[tokio::test]
async fn summary_mode_truncates_combined_text() {
    let snapshot = IncidentSnapshot {
        rail: vec![
            rail(&"a".repeat(300), "2024-04-05T15:41:00"),
            rail(&"b".repeat(300), "2024-04-05T15:42:00"),
        ],
        bus: Vec::new(),
        elevator: Vec::new(),
    };
    let aggregator = aggregator_with(snapshot).await;

    let summary = aggregator.summary(fixed_now()).expect("fresh incidents");
    assert_eq!(summary.chars().count(), 500);
    assert!(summary.ends_with("..."));
    assert!(summary.starts_with(&"a".repeat(300)));
    assert!(summary.contains(" | "));
}
