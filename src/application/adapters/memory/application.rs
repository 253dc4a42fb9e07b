//! In-memory repository for application lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::application::{
    domain::{Application, ApplicationId, PersistedApplicationData},
    ports::{ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult},
};

/// Thread-safe in-memory application repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApplicationRepository {
    state: Arc<RwLock<HashMap<ApplicationId, Application>>>,
}

impl InMemoryApplicationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn store(&self, application: &Application) -> ApplicationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.contains_key(&application.id()) {
            return Err(ApplicationRepositoryError::DuplicateApplication(
                application.id(),
            ));
        }

        state.insert(application.id(), application.clone());
        Ok(())
    }

    async fn update(&self, application: &Application) -> ApplicationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.contains_key(&application.id()) {
            return Err(ApplicationRepositoryError::NotFound(application.id()));
        }

        state.insert(application.id(), application.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: ApplicationId,
    ) -> ApplicationRepositoryResult<Option<Application>> {
        let state = self.state.read().map_err(|err| {
            ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        // Loads reconstruct the aggregate so the transient caches start
        // empty, matching durable storage.
        Ok(state.get(&id).map(|application| {
            Application::from_persisted(PersistedApplicationData {
                id: application.id(),
                name: application.name().clone(),
                status: application.status(),
                created_at: application.created_at(),
                updated_at: application.updated_at(),
            })
        }))
    }

    async fn delete(&self, id: ApplicationId) -> ApplicationRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .remove(&id)
            .map(|_| ())
            .ok_or(ApplicationRepositoryError::NotFound(id))
    }
}
