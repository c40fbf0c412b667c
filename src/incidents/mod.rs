// src/incidents/mod.rs
// Aggregation over the feed pipeline: fetch → freshness-filter → format.

pub mod feed;
pub mod format;
pub mod freshness;
pub mod types;

use chrono::{DateTime, Utc};

use crate::error::FetchError;
use crate::incidents::feed::IncidentSource;
use crate::incidents::types::{FormattedAlert, Incident, IncidentCategory, IncidentSnapshot};

/// Owns the current snapshot and derives run output from it. The snapshot
/// is replaced whole on every [`IncidentAggregator::refresh`]; there is no
/// merge and no history across runs.
pub struct IncidentAggregator<S> {
    source: S,
    snapshot: IncidentSnapshot,
}

impl<S: IncidentSource> IncidentAggregator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshot: IncidentSnapshot::default(),
        }
    }

    /// Fetch all categories concurrently and replace the snapshot. A failure
    /// in any one feed fails the whole refresh and leaves nothing usable.
    pub async fn refresh(&mut self) -> Result<(), FetchError> {
        self.snapshot = self.source.fetch_all().await?;
        tracing::info!(total = self.snapshot.total(), "incident snapshot refreshed");
        Ok(())
    }

    /// Incidents updated within the trailing check window, in category order
    /// rail → bus → elevator with intra-category feed order preserved.
    pub fn fresh_incidents(&self, now: DateTime<Utc>) -> Vec<Incident> {
        let cutoff = freshness::cutoff_time(now);
        tracing::debug!(%cutoff, "calculated freshness cutoff");

        let mut fresh = Vec::new();
        for category in IncidentCategory::ALL {
            fresh.extend(freshness::filter_fresh(
                self.snapshot.for_category(category),
                cutoff,
            ));
        }
        fresh
    }

    /// Per-incident mode: one bounded alert per fresh incident.
    pub fn formatted_alerts(&self, now: DateTime<Utc>) -> Vec<FormattedAlert> {
        self.fresh_incidents(now)
            .iter()
            .map(|incident| FormattedAlert {
                category: incident.category(),
                text: format::format_alert(incident),
            })
            .collect()
    }

    /// Summary mode: one combined post from every fresh incident's headline.
    /// `None` when there is nothing to publish; never `Some("")`.
    pub fn summary(&self, now: DateTime<Utc>) -> Option<String> {
        let fresh = self.fresh_incidents(now);
        if fresh.is_empty() {
            return None;
        }
        let joined = fresh
            .iter()
            .map(|incident| incident.headline().to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        Some(format::truncate_message(joined))
    }
}
