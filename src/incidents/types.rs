// src/incidents/types.rs
// Feed data model. Field names mirror the upstream JSON (PascalCase); every
// field tolerates absence, including DateUpdated (an empty value simply
// never passes the freshness check).

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RailIncident {
    #[serde(rename = "IncidentID", default)]
    pub incident_id: Option<String>,
    #[serde(default)]
    pub incident_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lines_affected: Option<String>,
    #[serde(default)]
    pub date_updated: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct BusIncident {
    #[serde(rename = "IncidentID", default)]
    pub incident_id: Option<String>,
    #[serde(default)]
    pub incident_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub routes_affected: Vec<String>,
    #[serde(default)]
    pub date_updated: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ElevatorIncident {
    #[serde(default)]
    pub unit_type: UnitType,
    #[serde(default)]
    pub unit_name: Option<String>,
    #[serde(default)]
    pub station_code: Option<String>,
    #[serde(default)]
    pub station_name: Option<String>,
    #[serde(default)]
    pub location_description: Option<String>,
    #[serde(default)]
    pub symptom_description: Option<String>,
    #[serde(default)]
    pub date_out_of_serv: Option<String>,
    #[serde(default)]
    pub date_updated: String,
    #[serde(default)]
    pub estimated_return_to_service: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitType {
    #[default]
    Elevator,
    Escalator,
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitType::Elevator => write!(f, "Elevator"),
            UnitType::Escalator => write!(f, "Escalator"),
        }
    }
}

/// Feed categories in publish order: rail → bus → elevator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncidentCategory {
    Rail,
    Bus,
    Elevator,
}

impl IncidentCategory {
    pub const ALL: [IncidentCategory; 3] = [
        IncidentCategory::Rail,
        IncidentCategory::Bus,
        IncidentCategory::Elevator,
    ];

    /// Name of the JSON array field carrying this category's incidents.
    pub fn feed_key(self) -> &'static str {
        match self {
            IncidentCategory::Rail => "Incidents",
            IncidentCategory::Bus => "BusIncidents",
            IncidentCategory::Elevator => "ElevatorIncidents",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IncidentCategory::Rail => "rail",
            IncidentCategory::Bus => "bus",
            IncidentCategory::Elevator => "elevator",
        }
    }
}

impl fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category-tagged view over the three record shapes, so filtering and
/// formatting run over one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incident {
    Rail(RailIncident),
    Bus(BusIncident),
    Elevator(ElevatorIncident),
}

impl Incident {
    pub fn category(&self) -> IncidentCategory {
        match self {
            Incident::Rail(_) => IncidentCategory::Rail,
            Incident::Bus(_) => IncidentCategory::Bus,
            Incident::Elevator(_) => IncidentCategory::Elevator,
        }
    }

    /// Raw feed timestamp of the last update, as supplied upstream.
    pub fn date_updated(&self) -> &str {
        match self {
            Incident::Rail(r) => &r.date_updated,
            Incident::Bus(b) => &b.date_updated,
            Incident::Elevator(e) => &e.date_updated,
        }
    }

    /// Primary free-text field: description for rail/bus, symptom
    /// description for elevator units.
    pub fn headline(&self) -> &str {
        match self {
            Incident::Rail(r) => r.description.as_deref().unwrap_or_default(),
            Incident::Bus(b) => b.description.as_deref().unwrap_or_default(),
            Incident::Elevator(e) => e.symptom_description.as_deref().unwrap_or_default(),
        }
    }
}

/// One fetch cycle's worth of incidents, in feed response order. Rebuilt
/// whole on every cycle; never merged with a previous snapshot.
#[derive(Debug, Clone, Default)]
pub struct IncidentSnapshot {
    pub rail: Vec<Incident>,
    pub bus: Vec<Incident>,
    pub elevator: Vec<Incident>,
}

impl IncidentSnapshot {
    pub fn for_category(&self, category: IncidentCategory) -> &[Incident] {
        match category {
            IncidentCategory::Rail => &self.rail,
            IncidentCategory::Bus => &self.bus,
            IncidentCategory::Elevator => &self.elevator,
        }
    }

    pub fn set_category(&mut self, category: IncidentCategory, incidents: Vec<Incident>) {
        match category {
            IncidentCategory::Rail => self.rail = incidents,
            IncidentCategory::Bus => self.bus = incidents,
            IncidentCategory::Elevator => self.elevator = incidents,
        }
    }

    pub fn total(&self) -> usize {
        self.rail.len() + self.bus.len() + self.elevator.len()
    }
}

/// An alert ready for publishing, tagged with the category it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedAlert {
    pub category: IncidentCategory,
    pub text: String,
}
