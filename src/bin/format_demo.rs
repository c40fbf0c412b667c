//! Offline demo: formats a few sample incidents and prints them (no network).

use transit_incident_notifier::incidents::format::format_alert;
use transit_incident_notifier::incidents::types::{
    BusIncident, ElevatorIncident, Incident, RailIncident, UnitType,
};

fn main() {
    let samples = [
        Incident::Rail(RailIncident {
            incident_id: Some("CA1D2".into()),
            incident_type: Some("Delay".into()),
            description: Some("Red Line: trains single tracking btwn Van Ness & Friendship Hts".into()),
            lines_affected: Some("RD;".into()),
            date_updated: "2024-04-05T15:40:00".into(),
        }),
        Incident::Bus(BusIncident {
            incident_id: Some("7F3A9".into()),
            incident_type: Some("Detour".into()),
            description: Some("Buses detoured off H St NE due to road work".into()),
            routes_affected: vec!["X2".into(), "X9".into()],
            date_updated: "2024-04-05T15:41:00".into(),
        }),
        Incident::Elevator(ElevatorIncident {
            unit_type: UnitType::Escalator,
            unit_name: Some("A03X01".into()),
            station_code: Some("A03".into()),
            station_name: Some("Dupont Circle".into()),
            location_description: Some("South entrance".into()),
            symptom_description: Some("Out of service".into()),
            date_out_of_serv: Some("2024-04-04T09:00:00".into()),
            date_updated: "2024-04-05T15:42:00".into(),
            estimated_return_to_service: Some("2024-04-08T12:00:00".into()),
        }),
    ];

    for incident in &samples {
        println!("--- {} ---", incident.category());
        println!("{}\n", format_alert(incident));
    }
}
