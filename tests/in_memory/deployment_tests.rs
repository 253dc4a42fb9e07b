//! In-memory integration tests for deployment record management.

use beacon::application::{
    adapters::memory::StaticConfigFetcher, domain::ConfigError, ports::DeploymentStore,
    services::LifecycleError,
};
use rstest::rstest;

use super::helpers::{harness, harness_with};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deployments_copy_the_resolved_strategy() {
    let harness = harness();
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    let deployment = harness
        .service
        .create_deployment(created.id())
        .await
        .expect("deployment creation should succeed");

    assert_eq!(deployment.application_id(), created.id());
    assert_eq!(deployment.strategy(), "rolling");

    let listed = harness
        .deployments
        .list_for(created.id())
        .await
        .expect("listing should succeed");
    assert_eq!(listed, vec![deployment]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn classified_config_failure_blocks_deployment_creation() {
    let harness = harness_with(StaticConfigFetcher::failing(ConfigError::Invalid));
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    let result = harness.service.create_deployment(created.id()).await;

    assert!(matches!(result, Err(LifecycleError::ConfigUnavailable(_))));
    let listed = harness
        .deployments
        .list_for(created.id())
        .await
        .expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removal_cascades_to_deployment_records() {
    let harness = harness();
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");
    let kept = harness
        .service
        .register("audit-service")
        .await
        .expect("registration should succeed");
    for _ in 0..2 {
        harness
            .service
            .create_deployment(created.id())
            .await
            .expect("deployment creation should succeed");
    }
    harness
        .service
        .create_deployment(kept.id())
        .await
        .expect("deployment creation should succeed");

    harness
        .service
        .remove(created.id())
        .await
        .expect("removal should succeed");

    let removed = harness
        .deployments
        .list_for(created.id())
        .await
        .expect("listing should succeed");
    assert!(removed.is_empty());
    let remaining = harness
        .deployments
        .list_for(kept.id())
        .await
        .expect("listing should succeed");
    assert_eq!(remaining.len(), 1);
}
