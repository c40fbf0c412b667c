// src/incidents/freshness.rs
// Trailing-window freshness filter. All comparisons happen in UTC: feed
// timestamps with an explicit offset are converted, naive timestamps are
// interpreted as UTC. One policy for every deployment variant.

use chrono::{DateTime, Duration, NaiveDateTime, Timelike, Utc};

use crate::incidents::types::Incident;

/// Trailing window used to decide whether an incident is "new".
pub const CHECK_INTERVAL_MINUTES: i64 = 5;

/// Cutoff for the current run: `now` with seconds and sub-seconds zeroed,
/// minus the check interval.
pub fn cutoff_time(now: DateTime<Utc>) -> DateTime<Utc> {
    let rounded = now
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);
    rounded - Duration::minutes(CHECK_INTERVAL_MINUTES)
}

/// Parse a feed-supplied timestamp. RFC 3339 offsets are honored; timestamps
/// without an offset (the feeds' usual shape) are taken as UTC.
pub fn parse_feed_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Keep the subsequence (order preserved) updated strictly after `cutoff`.
/// An unparseable DateUpdated excludes that incident and never aborts the
/// batch; future-dated incidents pass, strictly-after is the only check.
pub fn filter_fresh(incidents: &[Incident], cutoff: DateTime<Utc>) -> Vec<Incident> {
    incidents
        .iter()
        .filter(|incident| match parse_feed_timestamp(incident.date_updated()) {
            Some(updated) => updated > cutoff,
            None => {
                tracing::warn!(
                    category = %incident.category(),
                    raw = incident.date_updated(),
                    "invalid DateUpdated on incident; excluding from freshness check"
                );
                false
            }
        })
        .cloned()
        .collect()
}
