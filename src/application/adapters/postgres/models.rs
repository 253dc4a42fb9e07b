//! Diesel row models for application lifecycle persistence.

use super::schema::{applications, deployments};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for application records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ApplicationRow {
    /// Internal application identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Lifecycle status code.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for application records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = applications)]
pub struct NewApplicationRow {
    /// Internal application identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Lifecycle status code.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for deployment records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = deployments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeploymentRow {
    /// Internal deployment identifier.
    pub id: uuid::Uuid,
    /// Owning application identifier.
    pub application_id: uuid::Uuid,
    /// Deployment strategy.
    pub strategy: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for deployment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = deployments)]
pub struct NewDeploymentRow {
    /// Internal deployment identifier.
    pub id: uuid::Uuid,
    /// Owning application identifier.
    pub application_id: uuid::Uuid,
    /// Deployment strategy.
    pub strategy: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
