//! `PostgreSQL` adapters for application lifecycle persistence.

mod models;
mod repository;
mod schema;

pub use repository::{ApplicationPgPool, PostgresApplicationRepository, PostgresDeploymentStore};
