//! Deployment store port.

use crate::application::domain::{ApplicationId, Deployment};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for deployment store operations.
pub type DeploymentStoreResult<T> = Result<T, DeploymentStoreError>;

/// Deployment record storage contract.
#[async_trait]
pub trait DeploymentStore: Send + Sync {
    /// Creates a deployment record for the given application using the
    /// strategy copied from its resolved configuration.
    async fn create(
        &self,
        application_id: ApplicationId,
        strategy: &str,
    ) -> DeploymentStoreResult<Deployment>;

    /// Deletes every deployment record owned by the given application and
    /// returns how many were removed.
    async fn destroy_all_for(&self, application_id: ApplicationId) -> DeploymentStoreResult<usize>;

    /// Returns all deployment records owned by the given application.
    async fn list_for(&self, application_id: ApplicationId)
    -> DeploymentStoreResult<Vec<Deployment>>;
}

/// Errors returned by deployment store implementations.
#[derive(Debug, Clone, Error)]
pub enum DeploymentStoreError {
    /// Persistence-layer failure.
    #[error("deployment store error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DeploymentStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
