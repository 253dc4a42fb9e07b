//! Validated application display name.

use super::ApplicationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an application name, matching the `VARCHAR(255)`
/// column.
const MAX_NAME_LENGTH: usize = 255;

/// Validated display label for a registered application integration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationName(String);

impl ApplicationName {
    /// Creates a validated application name.
    ///
    /// The input is trimmed; the trimmed value must be non-empty and at
    /// most 255 characters.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::EmptyApplicationName`] when the
    /// value is empty after trimming, or
    /// [`ApplicationDomainError::ApplicationNameTooLong`] when it exceeds
    /// 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ApplicationDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ApplicationDomainError::EmptyApplicationName);
        }

        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(ApplicationDomainError::ApplicationNameTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the application name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ApplicationName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ApplicationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
