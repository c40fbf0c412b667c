// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod error;
pub mod incidents;
pub mod notify;
pub mod runner;

// ---- Re-exports for stable public API ----
pub use crate::config::{AppConfig, PublishMode};
pub use crate::error::{ConfigError, FetchError, PublishError, PublishPhase};
pub use crate::incidents::feed::{FeedClient, IncidentSource};
pub use crate::incidents::types::{
    FormattedAlert, Incident, IncidentCategory, IncidentSnapshot,
};
pub use crate::incidents::IncidentAggregator;
pub use crate::notify::{Publisher, ThreadsPublisher};
pub use crate::runner::RunReport;
