//! Recording transition log double for application lifecycle tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::application::ports::{TransitionLog, TransitionLogError, TransitionRecord};

/// Transition log that keeps every record in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransitionLog {
    records: Arc<RwLock<Vec<TransitionRecord>>>,
    fail_writes: bool,
}

impl RecordingTransitionLog {
    /// Creates a log that accepts every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log whose writes always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            fail_writes: true,
        }
    }

    /// Returns the records written so far, in write order.
    #[must_use]
    pub fn records(&self) -> Vec<TransitionRecord> {
        self.records
            .read()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TransitionLog for RecordingTransitionLog {
    async fn record(&self, record: &TransitionRecord) -> Result<(), TransitionLogError> {
        if self.fail_writes {
            return Err(TransitionLogError::sink(std::io::Error::other(
                "sink unavailable",
            )));
        }
        let mut records = self
            .records
            .write()
            .map_err(|err| TransitionLogError::sink(std::io::Error::other(err.to_string())))?;
        records.push(record.clone());
        Ok(())
    }
}
