// src/incidents/feed.rs
// HTTP adapter for the transit authority's incident feeds. Transport
// failures are hard errors; schema drift in an otherwise-OK response
// degrades to an empty category instead of crashing the cycle.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::Client;
use serde_json::Value;

use crate::config::FeedConfig;
use crate::error::FetchError;
use crate::incidents::types::{
    BusIncident, ElevatorIncident, Incident, IncidentCategory, IncidentSnapshot, RailIncident,
};

/// Seam for the aggregator: anything that can produce a full snapshot.
#[async_trait]
pub trait IncidentSource {
    async fn fetch_all(&self) -> Result<IncidentSnapshot, FetchError>;
}

pub struct FeedClient {
    client: Client,
    api_key: String,
    rail_url: String,
    bus_url: String,
    elevator_url: String,
    timeout: Duration,
}

impl FeedClient {
    pub fn new(cfg: &FeedConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: cfg.api_key.clone(),
            rail_url: cfg.rail_url.clone(),
            bus_url: cfg.bus_url.clone(),
            elevator_url: cfg.elevator_url.clone(),
            timeout: cfg.timeout,
        }
    }

    fn url_for(&self, category: IncidentCategory) -> &str {
        match category {
            IncidentCategory::Rail => &self.rail_url,
            IncidentCategory::Bus => &self.bus_url,
            IncidentCategory::Elevator => &self.elevator_url,
        }
    }

    pub async fn fetch_category(
        &self,
        category: IncidentCategory,
    ) -> Result<Vec<Incident>, FetchError> {
        let response = self
            .client
            .get(self.url_for(category))
            .header("api_key", &self.api_key)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                feed: category.label(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                feed: category.label(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(|e| FetchError::Transport {
            feed: category.label(),
            message: e.to_string(),
        })?;

        Ok(parse_incidents(category, &body))
    }
}

#[async_trait]
impl IncidentSource for FeedClient {
    /// Fan-out fetch across every category, joined all-or-nothing: one
    /// failure fails the batch and no partial snapshot escapes.
    async fn fetch_all(&self) -> Result<IncidentSnapshot, FetchError> {
        let fetches = IncidentCategory::ALL
            .iter()
            .map(|&category| self.fetch_category(category));
        let results = try_join_all(fetches).await?;

        let mut snapshot = IncidentSnapshot::default();
        for (category, incidents) in IncidentCategory::ALL.into_iter().zip(results) {
            tracing::debug!(feed = category.label(), count = incidents.len(), "feed fetched");
            snapshot.set_category(category, incidents);
        }
        Ok(snapshot)
    }
}

/// Pull the category's named array out of the response body. A missing
/// field, a non-array, or elements that no longer match the expected shape
/// all normalize to "no incidents".
pub fn parse_incidents(category: IncidentCategory, body: &Value) -> Vec<Incident> {
    let field = match body.get(category.feed_key()) {
        Some(v) if v.is_array() => v.clone(),
        _ => {
            tracing::warn!(
                feed = category.label(),
                key = category.feed_key(),
                "feed response missing expected array; treating as no incidents"
            );
            return Vec::new();
        }
    };

    let parsed = match category {
        IncidentCategory::Rail => serde_json::from_value::<Vec<RailIncident>>(field)
            .map(|v| v.into_iter().map(Incident::Rail).collect()),
        IncidentCategory::Bus => serde_json::from_value::<Vec<BusIncident>>(field)
            .map(|v| v.into_iter().map(Incident::Bus).collect()),
        IncidentCategory::Elevator => serde_json::from_value::<Vec<ElevatorIncident>>(field)
            .map(|v| v.into_iter().map(Incident::Elevator).collect()),
    };

    match parsed {
        Ok(incidents) => incidents,
        Err(e) => {
            tracing::warn!(
                feed = category.label(),
                error = %e,
                "feed elements no longer match expected shape; treating as no incidents"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_rail_array_in_feed_order() {
        let body = json!({
            "Incidents": [
                {
                    "IncidentID": "1",
                    "IncidentType": "Delay",
                    "Description": "Red Line delay",
                    "LinesAffected": "RD;",
                    "DateUpdated": "2024-04-05T15:40:00"
                },
                {
                    "IncidentID": "2",
                    "Description": "Blue Line single tracking",
                    "DateUpdated": "2024-04-05T15:41:00"
                }
            ]
        });
        let incidents = parse_incidents(IncidentCategory::Rail, &body);
        assert_eq!(incidents.len(), 2);
        assert_eq!(incidents[0].headline(), "Red Line delay");
        assert_eq!(incidents[1].headline(), "Blue Line single tracking");
    }

    #[test]
    fn missing_field_normalizes_to_empty() {
        let body = json!({ "SomethingElse": [] });
        assert!(parse_incidents(IncidentCategory::Bus, &body).is_empty());
    }

    #[test]
    fn non_array_field_normalizes_to_empty() {
        let body = json!({ "BusIncidents": "oops" });
        assert!(parse_incidents(IncidentCategory::Bus, &body).is_empty());
    }

    #[test]
    fn malformed_elements_normalize_to_empty() {
        let body = json!({ "ElevatorIncidents": [ { "UnitType": 7 } ] });
        assert!(parse_incidents(IncidentCategory::Elevator, &body).is_empty());
    }

    #[test]
    fn elevator_fields_deserialize() {
        let body = json!({
            "ElevatorIncidents": [{
                "UnitType": "ESCALATOR",
                "UnitName": "A03X01",
                "StationCode": "A03",
                "StationName": "Dupont Circle",
                "LocationDescription": "South entrance",
                "SymptomDescription": "Out of service",
                "DateOutOfServ": "2024-04-04T09:00:00",
                "DateUpdated": "2024-04-05T15:40:00",
                "EstimatedReturnToService": "2024-04-08T12:00:00"
            }]
        });
        let incidents = parse_incidents(IncidentCategory::Elevator, &body);
        assert_eq!(incidents.len(), 1);
        match &incidents[0] {
            Incident::Elevator(unit) => {
                assert_eq!(unit.station_name.as_deref(), Some("Dupont Circle"));
                assert_eq!(unit.date_updated, "2024-04-05T15:40:00");
            }
            other => panic!("expected elevator incident, got {other:?}"),
        }
    }
}
