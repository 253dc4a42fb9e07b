//! In-memory deployment store for application lifecycle tests.

use async_trait::async_trait;
use mockable::DefaultClock;
use std::sync::{Arc, RwLock};

use crate::application::{
    domain::{ApplicationId, Deployment},
    ports::{DeploymentStore, DeploymentStoreError, DeploymentStoreResult},
};

/// Thread-safe in-memory deployment store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeploymentStore {
    state: Arc<RwLock<Vec<Deployment>>>,
}

impl InMemoryDeploymentStore {
    /// Creates an empty in-memory deployment store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeploymentStore for InMemoryDeploymentStore {
    async fn create(
        &self,
        application_id: ApplicationId,
        strategy: &str,
    ) -> DeploymentStoreResult<Deployment> {
        let mut state = self.state.write().map_err(|err| {
            DeploymentStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let deployment = Deployment::new(application_id, strategy, &DefaultClock);
        state.push(deployment.clone());
        Ok(deployment)
    }

    async fn destroy_all_for(&self, application_id: ApplicationId) -> DeploymentStoreResult<usize> {
        let mut state = self.state.write().map_err(|err| {
            DeploymentStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let before = state.len();
        state.retain(|deployment| deployment.application_id() != application_id);
        Ok(before - state.len())
    }

    async fn list_for(
        &self,
        application_id: ApplicationId,
    ) -> DeploymentStoreResult<Vec<Deployment>> {
        let state = self.state.read().map_err(|err| {
            DeploymentStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .iter()
            .filter(|deployment| deployment.application_id() == application_id)
            .cloned()
            .collect())
    }
}
