//! In-memory adapters for application lifecycle tests.

mod application;
mod config;
mod deployment;
mod notifier;
mod transition_log;

pub use application::InMemoryApplicationRepository;
pub use config::StaticConfigFetcher;
pub use deployment::InMemoryDeploymentStore;
pub use notifier::RecordingInactiveNotifier;
pub use transition_log::RecordingTransitionLog;
