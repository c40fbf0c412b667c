pub mod threads;

pub use threads::ThreadsPublisher;

use async_trait::async_trait;

use crate::error::PublishError;

/// Publishing seam so the run coordinator can be exercised without the
/// real Threads API behind it.
#[async_trait]
pub trait Publisher {
    /// Publish `text` as one post; returns the published post's ID.
    async fn publish(&self, text: &str) -> Result<String, PublishError>;
}
