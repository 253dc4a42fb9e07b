//! Application aggregate root.

use super::transition::{self, StatusEvent, StatusTransition};
use super::{
    ApplicationDomainError, ApplicationId, ApplicationName, ApplicationStatus, ConfigError,
    DeploymentConfig, RepoState, RepoStatusPayload,
};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Application integration aggregate root.
///
/// The persisted `status` field is the durable source of truth and is only
/// mutated through the transition engine methods ([`Application::activate`],
/// [`Application::inactivate`], [`Application::update_status`]). The
/// configuration resolution outcome and the repository status
/// classification are memoized for the lifetime of the in-memory instance;
/// retrying either requires reconstructing the instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    id: ApplicationId,
    name: ApplicationName,
    status: ApplicationStatus,
    pipelines_enabled: bool,
    config: Option<Result<DeploymentConfig, ConfigError>>,
    repo_state: Option<Option<RepoState>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedApplicationData {
    /// Persisted application identifier.
    pub id: ApplicationId,
    /// Persisted display name.
    pub name: ApplicationName,
    /// Persisted lifecycle status.
    pub status: ApplicationStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Creates a new application with [`ApplicationStatus::Active`] status
    /// and pipelines enabled.
    #[must_use]
    pub fn new(name: ApplicationName, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ApplicationId::new(),
            name,
            status: ApplicationStatus::Active,
            pipelines_enabled: true,
            config: None,
            repo_state: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an application from persisted storage.
    ///
    /// The transient caches (configuration outcome, repository
    /// classification) start empty.
    #[must_use]
    pub fn from_persisted(data: PersistedApplicationData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            status: data.status,
            pipelines_enabled: true,
            config: None,
            repo_state: None,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Overrides the pipelines capability flag.
    ///
    /// The flag is a fixed capability (`true`) today; the override exists
    /// so the pipelines-disabled classification rule stays reachable.
    #[must_use]
    pub const fn with_pipelines_enabled(mut self, enabled: bool) -> Self {
        self.pipelines_enabled = enabled;
        self
    }

    /// Returns the application identifier.
    #[must_use]
    pub const fn id(&self) -> ApplicationId {
        self.id
    }

    /// Returns the application display name.
    #[must_use]
    pub const fn name(&self) -> &ApplicationName {
        &self.name
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ApplicationStatus {
        self.status
    }

    /// Returns whether pipelines are enabled for this application.
    #[must_use]
    pub const fn pipelines_enabled(&self) -> bool {
        self.pipelines_enabled
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the memoized configuration resolution outcome, if any.
    #[must_use]
    pub const fn config_resolution(&self) -> Option<&Result<DeploymentConfig, ConfigError>> {
        self.config.as_ref()
    }

    /// Returns the resolved deployment configuration when resolution
    /// succeeded.
    #[must_use]
    pub fn deployment_config(&self) -> Option<&DeploymentConfig> {
        self.config.as_ref().and_then(|outcome| outcome.as_ref().ok())
    }

    /// Returns the classified configuration error when resolution failed.
    #[must_use]
    pub fn config_error(&self) -> Option<ConfigError> {
        self.config
            .as_ref()
            .and_then(|outcome| outcome.as_ref().err())
            .copied()
    }

    /// Records the configuration resolution outcome.
    ///
    /// The first recorded outcome wins: once a value or a classified error
    /// is memoized, later recordings are ignored for the lifetime of this
    /// instance.
    pub fn record_config_resolution(&mut self, outcome: Result<DeploymentConfig, ConfigError>) {
        if self.config.is_none() {
            self.config = Some(outcome);
        }
    }

    /// Classifies the repository status payload, memoizing the judgment.
    ///
    /// The classification is computed at most once per instance; repeated
    /// calls return the cached judgment regardless of the payload supplied.
    /// `None` (no payload, or cached "unknown") means repository-driven
    /// guards are skipped.
    pub fn classify_repo_status(&mut self, payload: Option<&RepoStatusPayload>) -> Option<RepoState> {
        if let Some(memoized) = self.repo_state {
            return memoized;
        }
        let judged = payload.map(|raw| RepoState::classify(raw, self.pipelines_enabled));
        self.repo_state = Some(judged);
        judged
    }

    /// Transitions unconditionally to [`ApplicationStatus::Active`].
    pub fn activate(&mut self, clock: &impl Clock) -> StatusTransition {
        self.apply(ApplicationStatus::Active, StatusEvent::Activate, clock)
    }

    /// Transitions unconditionally to [`ApplicationStatus::Inactive`].
    pub fn inactivate(&mut self, clock: &impl Clock) -> StatusTransition {
        self.apply(ApplicationStatus::Inactive, StatusEvent::Inactivate, clock)
    }

    /// Evaluates the guarded `update_status` event.
    ///
    /// Classifies the payload (memoized) and selects the first matching
    /// guard against the memoized configuration outcome. The configuration
    /// outcome must already be recorded via
    /// [`Application::record_config_resolution`].
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::ConfigUnresolved`] when no
    /// configuration outcome is recorded, or
    /// [`ApplicationDomainError::TransitionRejected`] when no guard
    /// matches; in both cases the status is unchanged.
    pub fn update_status(
        &mut self,
        payload: Option<&RepoStatusPayload>,
        clock: &impl Clock,
    ) -> Result<StatusTransition, ApplicationDomainError> {
        let repo_state = self.classify_repo_status(payload);
        let config = self
            .config
            .as_ref()
            .ok_or(ApplicationDomainError::ConfigUnresolved(self.id))?;
        let target = transition::resolve_update_target(repo_state, config).ok_or(
            ApplicationDomainError::TransitionRejected {
                application_id: self.id,
                from: self.status,
            },
        )?;
        Ok(self.apply(target, StatusEvent::UpdateStatus, clock))
    }

    /// Commits a transition, advancing `updated_at` only when the status
    /// actually changes.
    fn apply(
        &mut self,
        target: ApplicationStatus,
        event: StatusEvent,
        clock: &impl Clock,
    ) -> StatusTransition {
        let from = self.status;
        self.status = target;
        if from != target {
            self.touch(clock);
        }
        StatusTransition::new(self.id, from, target, event)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
