//! Repository status payload and classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw repository status reported by the remote hosting service.
///
/// Supplied by the caller at status-update time; absence of the payload
/// means "unknown, skip repository-driven guards".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStatusPayload {
    repo_found: bool,
    archived: bool,
    merge_queue_id: Option<String>,
}

impl RepoStatusPayload {
    /// Creates a payload for a repository that was found.
    #[must_use]
    pub const fn found() -> Self {
        Self {
            repo_found: true,
            archived: false,
            merge_queue_id: None,
        }
    }

    /// Creates a payload for a repository the remote service could not
    /// find.
    #[must_use]
    pub const fn not_found() -> Self {
        Self {
            repo_found: false,
            archived: false,
            merge_queue_id: None,
        }
    }

    /// Marks the repository as archived.
    #[must_use]
    pub const fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    /// Sets the merge-queue identifier reported by the remote service.
    #[must_use]
    pub fn with_merge_queue_id(mut self, id: impl Into<String>) -> Self {
        self.merge_queue_id = Some(id.into());
        self
    }

    /// Returns whether the remote service found the repository.
    #[must_use]
    pub const fn repo_found(&self) -> bool {
        self.repo_found
    }

    /// Returns whether the repository is archived.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.archived
    }

    /// Returns the merge-queue identifier when one was reported and is
    /// non-blank.
    #[must_use]
    pub fn merge_queue_id(&self) -> Option<&str> {
        self.merge_queue_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Classified judgment of a repository's accessibility and activation
/// posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoState {
    /// The repository supports normal operation.
    Active,
    /// The repository is archived.
    Archived,
    /// Pipelines are enabled but no merge queue is configured.
    MergeQueueDisabled,
    /// The remote service could not find the repository.
    RepoNotFound,
}

impl RepoState {
    /// Classifies a raw status payload, first match wins:
    ///
    /// 1. repository not found → [`RepoState::RepoNotFound`]
    /// 2. repository archived → [`RepoState::Archived`]
    /// 3. pipelines enabled with a merge-queue id → [`RepoState::Active`]
    /// 4. pipelines enabled without one → [`RepoState::MergeQueueDisabled`]
    /// 5. pipelines not enabled → [`RepoState::Active`]
    #[must_use]
    pub fn classify(payload: &RepoStatusPayload, pipelines_enabled: bool) -> Self {
        if !payload.repo_found() {
            return Self::RepoNotFound;
        }
        if payload.is_archived() {
            return Self::Archived;
        }
        if pipelines_enabled {
            if payload.merge_queue_id().is_some() {
                return Self::Active;
            }
            return Self::MergeQueueDisabled;
        }
        Self::Active
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::MergeQueueDisabled => "merge_queue_disabled",
            Self::RepoNotFound => "repo_not_found",
        }
    }
}

impl fmt::Display for RepoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
