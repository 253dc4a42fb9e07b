//! Deployment record owned by an application.

use super::{ApplicationId, DeploymentId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Deployment record created from an application's resolved configuration.
///
/// The strategy is copied from the deployment configuration at creation
/// time; deployments are cascade-deleted when the owning application is
/// removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    id: DeploymentId,
    application_id: ApplicationId,
    strategy: String,
    created_at: DateTime<Utc>,
}

impl Deployment {
    /// Creates a new deployment record for the given application.
    #[must_use]
    pub fn new(
        application_id: ApplicationId,
        strategy: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: DeploymentId::new(),
            application_id,
            strategy: strategy.into(),
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a deployment record from persisted storage.
    #[must_use]
    pub fn from_parts(
        id: DeploymentId,
        application_id: ApplicationId,
        strategy: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            application_id,
            strategy: strategy.into(),
            created_at,
        }
    }

    /// Returns the deployment identifier.
    #[must_use]
    pub const fn id(&self) -> DeploymentId {
        self.id
    }

    /// Returns the owning application's identifier.
    #[must_use]
    pub const fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    /// Returns the deployment strategy copied from the configuration.
    #[must_use]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
