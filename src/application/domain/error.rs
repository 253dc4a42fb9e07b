//! Error types for application domain validation and transitions.

use super::{ApplicationId, ApplicationStatus};
use thiserror::Error;

/// Errors returned while constructing domain values or applying status
/// transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationDomainError {
    /// The application name is empty after trimming.
    #[error("application name must not be empty")]
    EmptyApplicationName,

    /// The application name exceeds the 255-character storage limit.
    #[error("application name exceeds 255 character limit: {0}")]
    ApplicationNameTooLong(String),

    /// The deployment strategy is empty after trimming.
    #[error("deployment strategy must not be empty")]
    EmptyDeploymentStrategy,

    /// A status update was evaluated before recording a configuration
    /// resolution outcome.
    #[error("configuration resolution outcome not recorded for application {0}")]
    ConfigUnresolved(ApplicationId),

    /// No guard matched the status-update inputs; the status is unchanged.
    #[error("no registered transition from '{from}' for application {application_id}")]
    TransitionRejected {
        /// Identifier of the application whose update was rejected.
        application_id: ApplicationId,
        /// Status the application was (and remains) in.
        from: ApplicationStatus,
    },
}

/// Error returned while parsing application status from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown application status: {0}")]
pub struct ParseApplicationStatusError(pub String);
