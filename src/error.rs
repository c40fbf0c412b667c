// src/error.rs
// Tagged error kinds for the bridge. Callers branch on the variant,
// never on message text.

use std::fmt;

use thiserror::Error;

/// Which half of the two-phase Threads protocol failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishPhase {
    /// First call: create the media container (draft post).
    Create,
    /// Second call: commit the container into a published post.
    Commit,
}

impl fmt::Display for PublishPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishPhase::Create => write!(f, "media container creation"),
            PublishPhase::Commit => write!(f, "media container publication"),
        }
    }
}

/// Required configuration is absent or unusable. Fatal before any network I/O.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {}", .keys.join(", "))]
    Missing { keys: Vec<String> },
    #[error("invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// A feed request failed. Fatal to the current run cycle: the fan-out join
/// is all-or-nothing, so no partial snapshot is ever used.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetching {feed} incidents: HTTP {status}")]
    Status { feed: &'static str, status: u16 },
    #[error("fetching {feed} incidents: {message}")]
    Transport { feed: &'static str, message: String },
}

/// A publish attempt failed. Isolated per item in per-incident mode,
/// fatal to the cycle in summary mode.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("post content cannot be empty")]
    EmptyContent,
    #[error("{phase} failed: no ID returned")]
    MissingId { phase: PublishPhase },
    #[error("{phase} failed: HTTP {status}")]
    Status { phase: PublishPhase, status: u16 },
    #[error("{phase} failed: {message}")]
    Transport { phase: PublishPhase, message: String },
}
