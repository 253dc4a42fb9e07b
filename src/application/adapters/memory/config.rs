//! Static configuration fetcher for application lifecycle tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::{
    domain::{ApplicationId, ConfigError, DeploymentConfig},
    ports::{ConfigFetchError, ConfigFetcher},
};

/// Configuration fetcher returning a preset outcome and counting how often
/// it is consulted.
#[derive(Debug, Clone)]
pub struct StaticConfigFetcher {
    outcome: Result<DeploymentConfig, ConfigError>,
    calls: Arc<AtomicUsize>,
}

impl StaticConfigFetcher {
    /// Creates a fetcher that always resolves the given configuration.
    #[must_use]
    pub fn succeeding(config: DeploymentConfig) -> Self {
        Self {
            outcome: Ok(config),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a fetcher that always fails with the given classified error.
    #[must_use]
    pub fn failing(error: ConfigError) -> Self {
        Self {
            outcome: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns how many times [`ConfigFetcher::fetch`] has been invoked.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ConfigFetcher for StaticConfigFetcher {
    fn fetch(&self, _id: ApplicationId) -> Result<DeploymentConfig, ConfigFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map_err(ConfigFetchError::from)
    }
}
