//! Deployment configuration and its classified resolution failures.

use super::ApplicationDomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resolved deployment configuration for an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    strategy: String,
    has_prerequisites: bool,
}

impl DeploymentConfig {
    /// Creates a configuration with the given deployment strategy.
    ///
    /// `has_prerequisites` defaults to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::EmptyDeploymentStrategy`] when the
    /// strategy is empty after trimming.
    pub fn new(strategy: impl Into<String>) -> Result<Self, ApplicationDomainError> {
        let strategy = strategy.into();
        if strategy.trim().is_empty() {
            return Err(ApplicationDomainError::EmptyDeploymentStrategy);
        }
        Ok(Self {
            strategy,
            has_prerequisites: false,
        })
    }

    /// Sets the prerequisites flag.
    #[must_use]
    pub const fn with_prerequisites(mut self, has_prerequisites: bool) -> Self {
        self.has_prerequisites = has_prerequisites;
        self
    }

    /// Returns the deployment strategy identifier.
    #[must_use]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Returns whether the configuration declares prerequisites.
    #[must_use]
    pub const fn has_prerequisites(&self) -> bool {
        self.has_prerequisites
    }
}

/// Classified deployment configuration resolution failure.
///
/// These are routine outcomes consumed by the status-update guards, not
/// exceptional conditions; each maps to a lifecycle state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigError {
    /// The application is not allowed to use the integration.
    #[error("application is not allowed")]
    NotAllowed,

    /// The configuration exists but failed validation.
    #[error("deployment configuration is invalid")]
    Invalid,

    /// No configuration was found for the application.
    #[error("deployment configuration not found")]
    NotFound,

    /// The repository holding the configuration cannot be accessed.
    #[error("repository is not accessible")]
    NotAccessible,
}
