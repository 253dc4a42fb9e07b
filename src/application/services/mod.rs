//! Application services for lifecycle orchestration.

mod lifecycle;
mod resolver;

pub use lifecycle::{ApplicationLifecycleService, LifecycleError, LifecycleResult};
pub use resolver::ConfigResolver;
