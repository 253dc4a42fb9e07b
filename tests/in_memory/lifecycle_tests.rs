//! In-memory integration tests for application lifecycle operations.

use beacon::application::{
    domain::{ApplicationId, ApplicationStatus, StatusEvent},
    ports::ApplicationRepositoryError,
    services::LifecycleError,
};
use rstest::rstest;

use super::helpers::harness;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_application_starts_active() {
    let harness = harness();

    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    assert_eq!(created.status(), ApplicationStatus::Active);
    assert_eq!(created.name().as_str(), "billing-gateway");

    let found = harness
        .service
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(found, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registration_rejects_blank_names() {
    let harness = harness();

    let result = harness.service.register("   ").await;

    assert!(matches!(result, Err(LifecycleError::Domain(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inactivate_then_activate_round_trip() {
    let harness = harness();
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    let inactivated = harness
        .service
        .inactivate(created.id())
        .await
        .expect("inactivation should succeed");
    assert_eq!(inactivated.status(), ApplicationStatus::Inactive);

    let reactivated = harness
        .service
        .activate(created.id())
        .await
        .expect("activation should succeed");
    assert_eq!(reactivated.status(), ApplicationStatus::Active);

    let records = harness.transition_log.records();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records
            .iter()
            .map(|record| (record.from, record.to, record.event))
            .collect::<Vec<_>>(),
        vec![
            (
                ApplicationStatus::Active,
                ApplicationStatus::Inactive,
                StatusEvent::Inactivate
            ),
            (
                ApplicationStatus::Inactive,
                ApplicationStatus::Active,
                StatusEvent::Activate
            ),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inactivation_notifies_with_the_application_name() {
    let harness = harness();
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    harness
        .service
        .inactivate(created.id())
        .await
        .expect("inactivation should succeed");

    let notified = harness.notifier.notified();
    assert_eq!(notified.len(), 1);
    assert_eq!(
        notified.first().expect("one notification").as_str(),
        "billing-gateway"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reactivation_does_not_notify() {
    let harness = harness();
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");
    harness
        .service
        .inactivate(created.id())
        .await
        .expect("inactivation should succeed");

    harness
        .service
        .activate(created.id())
        .await
        .expect("activation should succeed");

    assert_eq!(harness.notifier.notified().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removal_deletes_the_application() {
    let harness = harness();
    let created = harness
        .service
        .register("billing-gateway")
        .await
        .expect("registration should succeed");

    harness
        .service
        .remove(created.id())
        .await
        .expect("removal should succeed");

    let found = harness
        .service
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_unknown_applications_fail() {
    let harness = harness();
    let unknown = ApplicationId::new();

    for result in [
        harness.service.activate(unknown).await.err(),
        harness.service.inactivate(unknown).await.err(),
        harness.service.remove(unknown).await.err(),
    ] {
        assert!(matches!(
            result,
            Some(LifecycleError::Repository(
                ApplicationRepositoryError::NotFound(_)
            ))
        ));
    }
}
