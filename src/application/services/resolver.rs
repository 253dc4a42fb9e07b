//! Memoized deployment configuration resolution.

use crate::application::{
    domain::Application,
    ports::{ConfigFetchError, ConfigFetcher},
};
use std::sync::Arc;

/// Resolves an application's deployment configuration at most once per
/// aggregate instance.
///
/// Classified fetch failures are memoized on the aggregate alongside
/// successful resolutions, so a failed attempt short-circuits every later
/// lookup on the same instance without consulting the fetcher again
/// (fail-fast memoization). Retrying requires a freshly constructed
/// instance.
#[derive(Debug, Clone)]
pub struct ConfigResolver<F>
where
    F: ConfigFetcher,
{
    fetcher: Arc<F>,
}

impl<F> ConfigResolver<F>
where
    F: ConfigFetcher,
{
    /// Creates a resolver over the given fetch collaborator.
    #[must_use]
    pub const fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Ensures a configuration resolution outcome is recorded on the
    /// aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigFetchError::Unclassified`] when the fetch fails in
    /// an unrecognised way; nothing is memoized and the caller must abort
    /// the surrounding operation.
    pub fn resolve(&self, application: &mut Application) -> Result<(), ConfigFetchError> {
        if application.config_resolution().is_some() {
            return Ok(());
        }
        match self.fetcher.fetch(application.id()) {
            Ok(config) => {
                application.record_config_resolution(Ok(config));
                Ok(())
            }
            Err(ConfigFetchError::Classified(kind)) => {
                application.record_config_resolution(Err(kind));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
