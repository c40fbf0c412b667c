//! Transit Incident Notifier — Binary Entrypoint
//! One invocation = one check-and-publish cycle; an external scheduler
//! owns the cadence.

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use transit_incident_notifier::config::AppConfig;
use transit_incident_notifier::incidents::feed::FeedClient;
use transit_incident_notifier::incidents::IncidentAggregator;
use transit_incident_notifier::notify::ThreadsPublisher;
use transit_incident_notifier::runner;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("transit_incident_notifier=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    // Configuration gaps abort before any network activity.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let feed = FeedClient::new(&config.feeds);
    let mut aggregator = IncidentAggregator::new(feed);
    let publisher = ThreadsPublisher::new(&config.threads);

    match runner::run_once(&mut aggregator, &publisher, config.mode).await {
        Ok(report) => {
            info!(
                published = report.published,
                failed = report.failed,
                "transit incident check complete"
            );
        }
        Err(e) => {
            // Cycle-aborting failure: nothing was published.
            error!("transit incident check failed: {e:#}");
            std::process::exit(1);
        }
    }
}
