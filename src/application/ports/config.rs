//! Configuration fetch port.

use crate::application::domain::{ApplicationId, ConfigError, DeploymentConfig};
use std::sync::Arc;
use thiserror::Error;

/// Deployment configuration fetch contract.
///
/// The fetch is synchronous and fallible; callers needing timeouts or
/// cancellation wrap it at this boundary. Classified failures are routine
/// outcomes consumed by the status-update guards, while unclassified
/// failures abort the calling operation.
pub trait ConfigFetcher: Send + Sync {
    /// Fetches and validates the deployment configuration for an
    /// application.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigFetchError::Classified`] for the four recognised
    /// failure kinds, or [`ConfigFetchError::Unclassified`] for anything
    /// else.
    fn fetch(&self, id: ApplicationId) -> Result<DeploymentConfig, ConfigFetchError>;
}

/// Errors returned by configuration fetch implementations.
#[derive(Debug, Clone, Error)]
pub enum ConfigFetchError {
    /// A recognised configuration failure, consumed by the transition
    /// guards.
    #[error(transparent)]
    Classified(#[from] ConfigError),

    /// An unexpected failure; the status evaluation aborts with no state
    /// change.
    #[error("configuration fetch failed: {0}")]
    Unclassified(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConfigFetchError {
    /// Wraps an unexpected fetch failure.
    pub fn unclassified(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unclassified(Arc::new(err))
    }
}
