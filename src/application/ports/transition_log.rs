//! Transition log sink port.

use crate::application::domain::{ApplicationId, ApplicationStatus, StatusEvent, StatusTransition};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Structured record of a state-changing transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    /// Identifier of the transitioned application.
    pub application_id: ApplicationId,
    /// Status before the transition.
    pub from: ApplicationStatus,
    /// Status after the transition.
    pub to: ApplicationStatus,
    /// Event that fired the transition.
    pub event: StatusEvent,
    /// When the record was emitted.
    pub at: DateTime<Utc>,
}

impl TransitionRecord {
    /// Builds a record from an applied transition and a timestamp.
    #[must_use]
    pub const fn from_transition(transition: &StatusTransition, at: DateTime<Utc>) -> Self {
        Self {
            application_id: transition.application_id(),
            from: transition.from(),
            to: transition.to(),
            event: transition.event(),
            at,
        }
    }
}

/// Transition log sink contract.
#[async_trait]
pub trait TransitionLog: Send + Sync {
    /// Records a state-changing transition.
    async fn record(&self, record: &TransitionRecord) -> Result<(), TransitionLogError>;
}

/// Errors returned by transition log implementations.
#[derive(Debug, Clone, Error)]
pub enum TransitionLogError {
    /// The record could not be written to the sink.
    #[error("transition log write failed: {0}")]
    Sink(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransitionLogError {
    /// Wraps a sink error.
    pub fn sink(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Sink(Arc::new(err))
    }
}
