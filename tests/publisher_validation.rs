// tests/publisher_validation.rs
// Blank content is rejected before the publisher touches the network, so
// these run against an address nothing listens on.

use std::time::Duration;

use transit_incident_notifier::config::ThreadsConfig;
use transit_incident_notifier::error::PublishError;
use transit_incident_notifier::notify::{Publisher, ThreadsPublisher};

fn unreachable_publisher() -> ThreadsPublisher {
    ThreadsPublisher::new(&ThreadsConfig {
        user_id: "12345".into(),
        access_token: "token".into(),
        base_url: "http://127.0.0.1:1/v1.0".into(),
        timeout: Duration::from_millis(200),
    })
}

#[tokio::test]
async fn empty_content_fails_validation() {
    let publisher = unreachable_publisher();
    let err = publisher.publish("").await.expect_err("empty content");
    assert!(matches!(err, PublishError::EmptyContent));
}

#[tokio::test]
async fn whitespace_only_content_fails_validation() {
    let publisher = unreachable_publisher();
    let err = publisher.publish(" \n\t ").await.expect_err("blank content");
    assert!(matches!(err, PublishError::EmptyContent));
}
