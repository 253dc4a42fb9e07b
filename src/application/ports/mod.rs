//! Port contracts for application lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by application
//! lifecycle services.

pub mod config;
pub mod deployment;
pub mod notifier;
pub mod repository;
pub mod transition_log;

pub use config::{ConfigFetchError, ConfigFetcher};
pub use deployment::{DeploymentStore, DeploymentStoreError, DeploymentStoreResult};
pub use notifier::{InactiveNotifier, NotifyError};
pub use repository::{
    ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult,
};
pub use transition_log::{TransitionLog, TransitionLogError, TransitionRecord};
