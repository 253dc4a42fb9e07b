//! Status transition engine: events, guard table, transition records.

use super::{ApplicationId, ApplicationStatus, ConfigError, DeploymentConfig, RepoState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a configuration resolution attempt, as consumed by the
/// status-update guards.
pub(crate) type ConfigOutcome = Result<DeploymentConfig, ConfigError>;

/// Event driving a status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEvent {
    /// Unconditional transition to [`ApplicationStatus::Active`].
    Activate,
    /// Unconditional transition to [`ApplicationStatus::Inactive`].
    Inactivate,
    /// Composite guarded event evaluating repository status and
    /// configuration outcome.
    UpdateStatus,
}

impl StatusEvent {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Inactivate => "inactivate",
            Self::UpdateStatus => "update_status",
        }
    }
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of a successfully applied status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    application_id: ApplicationId,
    from: ApplicationStatus,
    to: ApplicationStatus,
    event: StatusEvent,
}

impl StatusTransition {
    pub(crate) const fn new(
        application_id: ApplicationId,
        from: ApplicationStatus,
        to: ApplicationStatus,
        event: StatusEvent,
    ) -> Self {
        Self {
            application_id,
            from,
            to,
            event,
        }
    }

    /// Returns the identifier of the transitioned application.
    #[must_use]
    pub const fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    /// Returns the status before the transition.
    #[must_use]
    pub const fn from(&self) -> ApplicationStatus {
        self.from
    }

    /// Returns the status after the transition.
    #[must_use]
    pub const fn to(&self) -> ApplicationStatus {
        self.to
    }

    /// Returns the event that fired the transition.
    #[must_use]
    pub const fn event(&self) -> StatusEvent {
        self.event
    }

    /// Returns whether the status actually changed (self-transitions do
    /// not fire lifecycle hooks).
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Guard predicate over the classified repository state and the
/// configuration resolution outcome.
type Guard = fn(Option<RepoState>, &ConfigOutcome) -> bool;

/// Ordered guard table for the `update_status` event, evaluated top-down
/// with first match winning. The order encodes precedence: repository-level
/// signals are authoritative and checked before configuration-level
/// outcomes, and among configuration failures access outranks missing
/// config outranks invalid config outranks the not-allowed soft
/// deactivation. Reordering changes observable behaviour.
const UPDATE_STATUS_GUARDS: &[(Guard, ApplicationStatus)] = &[
    (
        |repo, config| repo == Some(RepoState::Active) && config.is_ok(),
        ApplicationStatus::Active,
    ),
    (
        |repo, _| repo == Some(RepoState::Archived),
        ApplicationStatus::Archived,
    ),
    (
        |repo, _| repo == Some(RepoState::MergeQueueDisabled),
        ApplicationStatus::MergeQueueDisabled,
    ),
    (
        |repo, _| repo == Some(RepoState::RepoNotFound),
        ApplicationStatus::RepoNotFound,
    ),
    (
        |_, config| matches!(config, Err(ConfigError::NotAccessible)),
        ApplicationStatus::RepoNotAccessible,
    ),
    (
        |_, config| matches!(config, Err(ConfigError::NotFound)),
        ApplicationStatus::ConfigNotFound,
    ),
    (
        |_, config| matches!(config, Err(ConfigError::Invalid)),
        ApplicationStatus::InvalidConfigError,
    ),
    (
        |_, config| matches!(config, Err(ConfigError::NotAllowed)),
        ApplicationStatus::Inactive,
    ),
];

/// Selects the target status for an `update_status` event, or `None` when
/// no guard matches and the event must be rejected.
pub(crate) fn resolve_update_target(
    repo_state: Option<RepoState>,
    config: &ConfigOutcome,
) -> Option<ApplicationStatus> {
    UPDATE_STATUS_GUARDS
        .iter()
        .find(|(guard, _)| guard(repo_state, config))
        .map(|&(_, target)| target)
}
