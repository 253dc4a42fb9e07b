//! In-memory integration tests for guarded status evaluation.

use beacon::application::{
    adapters::memory::StaticConfigFetcher,
    domain::{ApplicationStatus, ConfigError, RepoStatusPayload},
    services::LifecycleError,
};
use rstest::rstest;

use super::helpers::{harness, harness_with};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn healthy_repo_and_config_keep_the_application_active() {
    let harness = harness();
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    let updated = harness
        .service
        .update_status(
            created.id(),
            Some(RepoStatusPayload::found().with_merge_queue_id("queue-7")),
        )
        .await
        .expect("status update should succeed");

    assert_eq!(updated.status(), ApplicationStatus::Active);
    // A self-transition leaves no trace in the hooks.
    assert!(harness.transition_log.records().is_empty());
}

#[rstest]
#[case(RepoStatusPayload::not_found(), ApplicationStatus::RepoNotFound)]
#[case(RepoStatusPayload::found().archived(), ApplicationStatus::Archived)]
#[case(RepoStatusPayload::found(), ApplicationStatus::MergeQueueDisabled)]
#[tokio::test(flavor = "multi_thread")]
async fn repository_signals_override_a_healthy_config(
    #[case] payload: RepoStatusPayload,
    #[case] expected: ApplicationStatus,
) {
    let harness = harness();
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    let updated = harness
        .service
        .update_status(created.id(), Some(payload))
        .await
        .expect("status update should succeed");

    assert_eq!(updated.status(), expected);
}

#[rstest]
#[case(ConfigError::NotAccessible, ApplicationStatus::RepoNotAccessible)]
#[case(ConfigError::NotFound, ApplicationStatus::ConfigNotFound)]
#[case(ConfigError::Invalid, ApplicationStatus::InvalidConfigError)]
#[case(ConfigError::NotAllowed, ApplicationStatus::Inactive)]
#[tokio::test(flavor = "multi_thread")]
async fn classified_config_failures_map_to_error_states(
    #[case] error: ConfigError,
    #[case] expected: ApplicationStatus,
) {
    let harness = harness_with(StaticConfigFetcher::failing(error));
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    let updated = harness
        .service
        .update_status(created.id(), None)
        .await
        .expect("status update should succeed");

    assert_eq!(updated.status(), expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn soft_deactivation_notifies_like_an_explicit_inactivation() {
    let harness = harness_with(StaticConfigFetcher::failing(ConfigError::NotAllowed));
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    harness
        .service
        .update_status(created.id(), None)
        .await
        .expect("status update should succeed");

    let notified = harness.notifier.notified();
    assert_eq!(notified.len(), 1);
    assert_eq!(
        notified.first().expect("one notification").as_str(),
        "billing-gateway"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_update_leaves_the_persisted_status_untouched() {
    // Unknown repo state with a healthy config matches no guard.
    let harness = harness();
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    let result = harness.service.update_status(created.id(), None).await;

    assert!(matches!(result, Err(LifecycleError::Domain(_))));
    let found = harness
        .service
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed")
        .expect("application should still exist");
    assert_eq!(found.status(), ApplicationStatus::Active);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn each_update_resolves_configuration_on_a_fresh_instance() {
    let harness = harness_with(StaticConfigFetcher::failing(ConfigError::NotFound));
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    for _ in 0..2 {
        let updated = harness
            .service
            .update_status(created.id(), None)
            .await
            .expect("status update should succeed");
        assert_eq!(updated.status(), ApplicationStatus::ConfigNotFound);
    }

    // Memoization is per loaded instance; every service call reloads and
    // therefore re-resolves.
    assert_eq!(harness.fetcher.fetch_count(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn later_payloads_can_recover_an_errored_application() {
    let harness = harness();
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    harness
        .service
        .update_status(created.id(), Some(RepoStatusPayload::not_found()))
        .await
        .expect("status update should succeed");
    let errored = harness
        .service
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed")
        .expect("application should exist");
    assert_eq!(errored.status(), ApplicationStatus::RepoNotFound);

    let recovered = harness
        .service
        .update_status(
            created.id(),
            Some(RepoStatusPayload::found().with_merge_queue_id("queue-7")),
        )
        .await
        .expect("status update should succeed");
    assert_eq!(recovered.status(), ApplicationStatus::Active);
}
