//! Application lifecycle status.

use super::ParseApplicationStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a registered application integration.
///
/// Every state may receive further transitions; there is no designated
/// terminal state. The persisted representation is the canonical string
/// code returned by [`ApplicationStatus::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// The integration is operating normally. Initial state.
    Active,
    /// The integration has been deactivated.
    Inactive,
    /// The deployment configuration exists but failed validation.
    InvalidConfigError,
    /// The remote repository is archived.
    Archived,
    /// No deployment configuration was found.
    ConfigNotFound,
    /// Pipelines are enabled but the repository has no merge queue.
    MergeQueueDisabled,
    /// The remote repository cannot be accessed.
    RepoNotAccessible,
    /// The remote repository was not found.
    RepoNotFound,
}

impl ApplicationStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::InvalidConfigError => "invalid_config_error",
            Self::Archived => "archived",
            Self::ConfigNotFound => "config_not_found",
            Self::MergeQueueDisabled => "merge_queue_disabled",
            Self::RepoNotAccessible => "repo_not_accessible",
            Self::RepoNotFound => "repo_not_found",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ApplicationStatus {
    type Error = ParseApplicationStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "invalid_config_error" => Ok(Self::InvalidConfigError),
            "archived" => Ok(Self::Archived),
            "config_not_found" => Ok(Self::ConfigNotFound),
            "merge_queue_disabled" => Ok(Self::MergeQueueDisabled),
            "repo_not_accessible" => Ok(Self::RepoNotAccessible),
            "repo_not_found" => Ok(Self::RepoNotFound),
            _ => Err(ParseApplicationStatusError(value.to_owned())),
        }
    }
}
