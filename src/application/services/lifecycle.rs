//! Service layer for application lifecycle orchestration.
//!
//! Provides [`ApplicationLifecycleService`] which coordinates application
//! registration, status updates, deployment record management, and removal,
//! firing lifecycle hooks after each committed transition.

use super::resolver::ConfigResolver;
use crate::application::{
    domain::{
        Application, ApplicationDomainError, ApplicationId, ApplicationName, ApplicationStatus,
        Deployment, RepoStatusPayload, StatusTransition,
    },
    ports::{
        ApplicationRepository, ApplicationRepositoryError, ConfigFetchError, ConfigFetcher,
        DeploymentStore, DeploymentStoreError, InactiveNotifier, TransitionLog, TransitionRecord,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for application lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Domain validation or transition failure.
    #[error(transparent)]
    Domain(#[from] ApplicationDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ApplicationRepositoryError),
    /// Deployment store operation failed.
    #[error(transparent)]
    Deployments(#[from] DeploymentStoreError),
    /// Configuration fetch failed in an unclassified way.
    #[error(transparent)]
    ConfigFetch(#[from] ConfigFetchError),
    /// No deployment configuration is resolved for the application.
    #[error("no deployment configuration resolved for application {0}")]
    ConfigUnavailable(ApplicationId),
}

/// Result type for application lifecycle service operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Application lifecycle orchestration service.
///
/// All status mutations flow through the domain transition engine; the
/// service persists the committed state and then fires the lifecycle
/// hooks. Hook failures are reported and never roll back a committed
/// transition. Callers must serialize operations per application
/// identifier; the service itself takes no locks.
#[derive(Clone)]
pub struct ApplicationLifecycleService<R, D, F, N, L, C>
where
    R: ApplicationRepository,
    D: DeploymentStore,
    F: ConfigFetcher,
    N: InactiveNotifier,
    L: TransitionLog,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    deployments: Arc<D>,
    config_resolver: ConfigResolver<F>,
    notifier: Arc<N>,
    transition_log: Arc<L>,
    clock: Arc<C>,
}

impl<R, D, F, N, L, C> ApplicationLifecycleService<R, D, F, N, L, C>
where
    R: ApplicationRepository,
    D: DeploymentStore,
    F: ConfigFetcher,
    N: InactiveNotifier,
    L: TransitionLog,
    C: Clock + Send + Sync,
{
    /// Creates a new application lifecycle service.
    #[must_use]
    pub fn new(
        repository: Arc<R>,
        deployments: Arc<D>,
        config_fetcher: Arc<F>,
        notifier: Arc<N>,
        transition_log: Arc<L>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            deployments,
            config_resolver: ConfigResolver::new(config_fetcher),
            notifier,
            transition_log,
            clock,
        }
    }

    /// Registers a new application integration with `Active` status.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError`] when name validation fails or the
    /// repository rejects persistence.
    pub async fn register(&self, name: impl Into<String> + Send) -> LifecycleResult<Application> {
        let name = ApplicationName::new(name)?;
        let application = Application::new(name, &*self.clock);
        self.repository.store(&application).await?;
        Ok(application)
    }

    /// Finds an application by identifier.
    ///
    /// Returns `Ok(None)` when no application has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: ApplicationId) -> LifecycleResult<Option<Application>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Unconditionally transitions an application to `Active`.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Repository`] when the application is not
    /// found or persistence fails.
    pub async fn activate(&self, id: ApplicationId) -> LifecycleResult<Application> {
        let mut application = self.find_by_id_or_error(id).await?;
        let transition = application.activate(&*self.clock);
        self.commit(&application, &transition).await
    }

    /// Unconditionally transitions an application to `Inactive`, notifying
    /// the inactive hook when the state changes.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Repository`] when the application is not
    /// found or persistence fails.
    pub async fn inactivate(&self, id: ApplicationId) -> LifecycleResult<Application> {
        let mut application = self.find_by_id_or_error(id).await?;
        let transition = application.inactivate(&*self.clock);
        self.commit(&application, &transition).await
    }

    /// Evaluates the guarded status-update event against a raw repository
    /// status payload.
    ///
    /// Resolves the deployment configuration (memoized on the loaded
    /// instance), classifies the payload, and applies the first matching
    /// guard. A rejected event or an unclassified fetch failure leaves the
    /// persisted status untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Domain`] when no guard matches,
    /// [`LifecycleError::ConfigFetch`] when configuration resolution fails
    /// in an unclassified way, or [`LifecycleError::Repository`] when the
    /// application is not found or persistence fails.
    pub async fn update_status(
        &self,
        id: ApplicationId,
        payload: Option<RepoStatusPayload>,
    ) -> LifecycleResult<Application> {
        let mut application = self.find_by_id_or_error(id).await?;
        self.config_resolver.resolve(&mut application)?;
        let transition = application.update_status(payload.as_ref(), &*self.clock)?;
        self.commit(&application, &transition).await
    }

    /// Creates a deployment record from the application's resolved
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::ConfigUnavailable`] when resolution did
    /// not produce a configuration, [`LifecycleError::ConfigFetch`] when it
    /// fails in an unclassified way, or [`LifecycleError::Deployments`]
    /// when the store rejects the record.
    pub async fn create_deployment(&self, id: ApplicationId) -> LifecycleResult<Deployment> {
        let mut application = self.find_by_id_or_error(id).await?;
        self.config_resolver.resolve(&mut application)?;
        let strategy = application
            .deployment_config()
            .map(|config| config.strategy().to_owned())
            .ok_or(LifecycleError::ConfigUnavailable(id))?;
        Ok(self.deployments.create(id, &strategy).await?)
    }

    /// Removes an application, destroying its deployment records first so
    /// no orphaned deployments persist.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Repository`] when the application is not
    /// found, or [`LifecycleError::Deployments`] when cascade deletion
    /// fails.
    pub async fn remove(&self, id: ApplicationId) -> LifecycleResult<()> {
        let application = self.find_by_id_or_error(id).await?;
        let destroyed = self.deployments.destroy_all_for(application.id()).await?;
        self.repository.delete(application.id()).await?;
        info!(
            application_id = %application.id(),
            deployments_destroyed = destroyed,
            "application removed"
        );
        Ok(())
    }

    async fn find_by_id_or_error(&self, id: ApplicationId) -> LifecycleResult<Application> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationRepositoryError::NotFound(id).into())
    }

    /// Persists the transitioned application and fires the lifecycle
    /// hooks. The transition is committed before any hook runs; hook
    /// failures are reported and swallowed.
    async fn commit(
        &self,
        application: &Application,
        transition: &StatusTransition,
    ) -> LifecycleResult<Application> {
        self.repository.update(application).await?;
        self.fire_transition_hooks(application.name(), transition)
            .await;
        Ok(application.clone())
    }

    async fn fire_transition_hooks(&self, name: &ApplicationName, transition: &StatusTransition) {
        if !transition.changed() {
            return;
        }

        info!(
            application_id = %transition.application_id(),
            from = %transition.from(),
            to = %transition.to(),
            event = %transition.event(),
            "application status changed"
        );

        let record = TransitionRecord::from_transition(transition, self.clock.utc());
        if let Err(err) = self.transition_log.record(&record).await {
            warn!(
                application_id = %transition.application_id(),
                error = %err,
                "transition log write failed"
            );
        }

        if transition.to() == ApplicationStatus::Inactive {
            if let Err(err) = self.notifier.notify(name).await {
                warn!(
                    application_id = %transition.application_id(),
                    error = %err,
                    "inactive notification failed"
                );
            }
        }
    }
}
