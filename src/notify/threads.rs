// src/notify/threads.rs
// Threads Graph API client. Publishing is a strict two-phase protocol:
// create a media container, then commit it. Each phase must return a
// non-empty ID. No automatic retry anywhere.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Publisher;
use crate::config::ThreadsConfig;
use crate::error::{PublishError, PublishPhase};

pub struct ThreadsPublisher {
    client: Client,
    user_id: String,
    access_token: String,
    base_url: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct CreateContainerRequest<'a> {
    media_type: &'static str,
    text: &'a str,
    access_token: &'a str,
}

#[derive(Serialize)]
struct PublishContainerRequest<'a> {
    creation_id: &'a str,
    access_token: &'a str,
}

#[derive(Deserialize)]
struct IdResponse {
    #[serde(default)]
    id: String,
}

impl ThreadsPublisher {
    pub fn new(cfg: &ThreadsConfig) -> Self {
        Self {
            client: Client::new(),
            user_id: cfg.user_id.clone(),
            access_token: cfg.access_token.clone(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            timeout: cfg.timeout,
        }
    }

    async fn post_for_id<B: Serialize + Sync>(
        &self,
        phase: PublishPhase,
        path: &str,
        body: &B,
    ) -> Result<String, PublishError> {
        let url = format!("{}/{}/{}", self.base_url, self.user_id, path);
        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| PublishError::Transport {
                phase,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Status {
                phase,
                status: status.as_u16(),
            });
        }

        let parsed: IdResponse = response.json().await.map_err(|e| PublishError::Transport {
            phase,
            message: e.to_string(),
        })?;

        if parsed.id.is_empty() {
            return Err(PublishError::MissingId { phase });
        }
        Ok(parsed.id)
    }
}

#[async_trait]
impl Publisher for ThreadsPublisher {
    async fn publish(&self, text: &str) -> Result<String, PublishError> {
        // Validated before any network call.
        if text.trim().is_empty() {
            return Err(PublishError::EmptyContent);
        }

        let container_id = self
            .post_for_id(
                PublishPhase::Create,
                "threads",
                &CreateContainerRequest {
                    media_type: "TEXT",
                    text,
                    access_token: &self.access_token,
                },
            )
            .await?;

        let post_id = self
            .post_for_id(
                PublishPhase::Commit,
                "threads_publish",
                &PublishContainerRequest {
                    creation_id: &container_id,
                    access_token: &self.access_token,
                },
            )
            .await?;

        Ok(post_id)
    }
}
