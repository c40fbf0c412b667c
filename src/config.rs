// src/config.rs
// Environment-sourced configuration, loaded once at startup into an explicit
// struct and passed into each component. No ambient globals.

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const ENV_API_KEY: &str = "TRANSIT_API_KEY";
pub const ENV_RAIL_URL: &str = "TRANSIT_RAIL_INCIDENTS_URL";
pub const ENV_BUS_URL: &str = "TRANSIT_BUS_INCIDENTS_URL";
pub const ENV_ELEVATOR_URL: &str = "TRANSIT_ELEVATOR_INCIDENTS_URL";
pub const ENV_THREADS_USER_ID: &str = "THREADS_USER_ID";
pub const ENV_THREADS_ACCESS_TOKEN: &str = "THREADS_ACCESS_TOKEN";
pub const ENV_THREADS_BASE_URL: &str = "THREADS_BASE_URL";
pub const ENV_THREADS_TIMEOUT_MS: &str = "THREADS_TIMEOUT_MS";
pub const ENV_PUBLISH_MODE: &str = "PUBLISH_MODE";

pub const DEFAULT_THREADS_BASE_URL: &str = "https://graph.threads.net/v1.0";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Output granularity of a run: one post per fresh incident, or a single
/// combined summary post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishMode {
    #[default]
    PerIncident,
    Summary,
}

#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Value of the `api_key` header attached to every feed request.
    pub api_key: String,
    pub rail_url: String,
    pub bus_url: String,
    pub elevator_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ThreadsConfig {
    pub user_id: String,
    pub access_token: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub feeds: FeedConfig,
    pub threads: ThreadsConfig,
    pub mode: PublishMode,
}

impl AppConfig {
    /// Read configuration from the environment. All missing required keys are
    /// reported together so one run of the binary surfaces every gap at once.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut missing = Vec::new();

        let api_key = require(ENV_API_KEY, &mut missing);
        let rail_url = require(ENV_RAIL_URL, &mut missing);
        let bus_url = require(ENV_BUS_URL, &mut missing);
        let elevator_url = require(ENV_ELEVATOR_URL, &mut missing);
        let user_id = require(ENV_THREADS_USER_ID, &mut missing);
        let access_token = require(ENV_THREADS_ACCESS_TOKEN, &mut missing);

        if !missing.is_empty() {
            return Err(ConfigError::Missing { keys: missing });
        }

        let base_url = optional(ENV_THREADS_BASE_URL)
            .unwrap_or_else(|| DEFAULT_THREADS_BASE_URL.to_string());

        let timeout_ms = match optional(ENV_THREADS_TIMEOUT_MS) {
            None => DEFAULT_TIMEOUT_MS,
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: ENV_THREADS_TIMEOUT_MS.to_string(),
                message: format!("expected milliseconds, got {raw:?}"),
            })?,
        };

        let mode = match optional(ENV_PUBLISH_MODE).as_deref() {
            None => PublishMode::default(),
            Some("per-incident") => PublishMode::PerIncident,
            Some("summary") => PublishMode::Summary,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: ENV_PUBLISH_MODE.to_string(),
                    message: format!("expected per-incident or summary, got {other:?}"),
                })
            }
        };

        Ok(Self {
            feeds: FeedConfig {
                api_key,
                rail_url,
                bus_url,
                elevator_url,
                timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            },
            threads: ThreadsConfig {
                user_id,
                access_token,
                base_url,
                timeout: Duration::from_millis(timeout_ms),
            },
            mode,
        })
    }
}

fn require(key: &str, missing: &mut Vec<String>) -> String {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(key.to_string());
            String::new()
        }
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
