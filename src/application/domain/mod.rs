//! Domain model for application integration lifecycle management.
//!
//! The application domain models the lifecycle status of a registered
//! application/repository integration, the classification of raw repository
//! status payloads, deployment configuration resolution outcomes, and the
//! guarded transition engine that is the only path allowed to mutate an
//! application's status. All infrastructure concerns are kept outside the
//! domain boundary.

mod application;
mod config;
mod deployment;
mod error;
mod ids;
mod name;
mod repo_status;
mod status;
mod transition;

pub use application::{Application, PersistedApplicationData};
pub use config::{ConfigError, DeploymentConfig};
pub use deployment::Deployment;
pub use error::{ApplicationDomainError, ParseApplicationStatusError};
pub use ids::{ApplicationId, DeploymentId};
pub use name::ApplicationName;
pub use repo_status::{RepoState, RepoStatusPayload};
pub use status::ApplicationStatus;
pub use transition::{StatusEvent, StatusTransition};
