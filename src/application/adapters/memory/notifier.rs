//! Recording notifier double for application lifecycle tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::application::{
    domain::ApplicationName,
    ports::{InactiveNotifier, NotifyError},
};

/// Notifier that records every notified application name.
#[derive(Debug, Clone, Default)]
pub struct RecordingInactiveNotifier {
    notified: Arc<RwLock<Vec<ApplicationName>>>,
    fail_delivery: bool,
}

impl RecordingInactiveNotifier {
    /// Creates a notifier that accepts every notification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notifier whose deliveries always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            notified: Arc::new(RwLock::new(Vec::new())),
            fail_delivery: true,
        }
    }

    /// Returns the names notified so far, in delivery order.
    #[must_use]
    pub fn notified(&self) -> Vec<ApplicationName> {
        self.notified
            .read()
            .map(|names| names.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl InactiveNotifier for RecordingInactiveNotifier {
    async fn notify(&self, name: &ApplicationName) -> Result<(), NotifyError> {
        if self.fail_delivery {
            return Err(NotifyError::delivery(std::io::Error::other(
                "delivery refused",
            )));
        }
        let mut notified = self
            .notified
            .write()
            .map_err(|err| NotifyError::delivery(std::io::Error::other(err.to_string())))?;
        notified.push(name.clone());
        Ok(())
    }
}
