// src/runner.rs
// One run cycle: refresh the snapshot, derive alerts, publish them.
// Stateless across invocations; external scheduling owns the cadence.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{error, info};

use crate::config::PublishMode;
use crate::incidents::feed::IncidentSource;
use crate::incidents::IncidentAggregator;
use crate::notify::Publisher;

/// Pause between successive successful posts, to stay under the Threads
/// API's rate limits.
pub const INTER_POST_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub published: usize,
    pub failed: usize,
}

/// Execute one cycle. A fetch failure aborts the cycle before any publish
/// attempt. In per-incident mode each publish failure is isolated: it is
/// logged, counted, and the remaining alerts are still attempted. In summary
/// mode the single combined publish is all there is, so its failure aborts
/// the cycle.
pub async fn run_once<S, P>(
    aggregator: &mut IncidentAggregator<S>,
    publisher: &P,
    mode: PublishMode,
) -> Result<RunReport>
where
    S: IncidentSource + Send + Sync,
    P: Publisher + Send + Sync,
{
    info!("starting transit incident check");
    aggregator.refresh().await.context("fetching incident feeds")?;

    let now = Utc::now();
    match mode {
        PublishMode::PerIncident => {
            let alerts = aggregator.formatted_alerts(now);
            if alerts.is_empty() {
                info!("no new incidents found");
                return Ok(RunReport::default());
            }
            info!(count = alerts.len(), "found new incidents to publish");

            let mut report = RunReport::default();
            for alert in &alerts {
                match publisher.publish(&alert.text).await {
                    Ok(post_id) => {
                        info!(category = %alert.category, %post_id, "published incident alert");
                        report.published += 1;
                        tokio::time::sleep(Duration::from_millis(INTER_POST_DELAY_MS)).await;
                    }
                    Err(e) => {
                        error!(category = %alert.category, error = %e, "failed to publish incident alert");
                        report.failed += 1;
                    }
                }
            }
            Ok(report)
        }
        PublishMode::Summary => match aggregator.summary(now) {
            None => {
                info!("no new incidents found");
                Ok(RunReport::default())
            }
            Some(text) => {
                let post_id = publisher
                    .publish(&text)
                    .await
                    .context("publishing incident summary")?;
                info!(%post_id, "published incident summary");
                Ok(RunReport {
                    published: 1,
                    failed: 0,
                })
            }
        },
    }
}
