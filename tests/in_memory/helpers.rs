//! Shared harness for in-memory integration tests.

use std::sync::Arc;

use beacon::application::{
    adapters::memory::{
        InMemoryApplicationRepository, InMemoryDeploymentStore, RecordingInactiveNotifier,
        RecordingTransitionLog, StaticConfigFetcher,
    },
    domain::DeploymentConfig,
    services::ApplicationLifecycleService,
};
use mockable::DefaultClock;

/// Lifecycle service wired entirely to in-memory adapters.
pub type TestService = ApplicationLifecycleService<
    InMemoryApplicationRepository,
    InMemoryDeploymentStore,
    StaticConfigFetcher,
    RecordingInactiveNotifier,
    RecordingTransitionLog,
    DefaultClock,
>;

/// Service plus handles to the recording doubles behind it.
pub struct TestHarness {
    pub service: TestService,
    pub deployments: Arc<InMemoryDeploymentStore>,
    pub fetcher: Arc<StaticConfigFetcher>,
    pub notifier: Arc<RecordingInactiveNotifier>,
    pub transition_log: Arc<RecordingTransitionLog>,
}

/// Builds a harness around the given configuration fetcher.
#[must_use]
pub fn harness_with(fetcher: StaticConfigFetcher) -> TestHarness {
    let deployments = Arc::new(InMemoryDeploymentStore::new());
    let fetcher = Arc::new(fetcher);
    let notifier = Arc::new(RecordingInactiveNotifier::new());
    let transition_log = Arc::new(RecordingTransitionLog::new());
    let service = ApplicationLifecycleService::new(
        Arc::new(InMemoryApplicationRepository::new()),
        Arc::clone(&deployments),
        Arc::clone(&fetcher),
        Arc::clone(&notifier),
        Arc::clone(&transition_log),
        Arc::new(DefaultClock),
    );
    TestHarness {
        service,
        deployments,
        fetcher,
        notifier,
        transition_log,
    }
}

/// Builds a harness whose fetcher always resolves a rolling strategy.
#[must_use]
pub fn harness() -> TestHarness {
    harness_with(StaticConfigFetcher::succeeding(
        DeploymentConfig::new("rolling").expect("valid config"),
    ))
}
