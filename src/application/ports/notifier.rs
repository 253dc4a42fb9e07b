//! Inactive-notification port.

use crate::application::domain::ApplicationName;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Notification contract fired when an application enters the inactive
/// state.
///
/// Fire-and-forget from the engine's perspective: delivery failure is
/// reported but never rolls back the committed transition.
#[async_trait]
pub trait InactiveNotifier: Send + Sync {
    /// Notifies that the named application became inactive.
    async fn notify(&self, name: &ApplicationName) -> Result<(), NotifyError>;
}

/// Errors returned by notifier implementations.
#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    /// Notification delivery failed.
    #[error("notification delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotifyError {
    /// Wraps a delivery error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
