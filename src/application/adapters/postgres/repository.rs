//! `PostgreSQL` repository implementations for application lifecycle
//! storage.

use super::{
    models::{ApplicationRow, DeploymentRow, NewApplicationRow, NewDeploymentRow},
    schema::{applications, deployments},
};
use crate::application::{
    domain::{
        Application, ApplicationId, ApplicationName, ApplicationStatus, Deployment, DeploymentId,
        PersistedApplicationData,
    },
    ports::{
        ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult,
        DeploymentStore, DeploymentStoreError, DeploymentStoreResult,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use mockable::DefaultClock;

/// `PostgreSQL` connection pool type used by application adapters.
pub type ApplicationPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed application repository.
#[derive(Debug, Clone)]
pub struct PostgresApplicationRepository {
    pool: ApplicationPgPool,
}

impl PostgresApplicationRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ApplicationPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ApplicationRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ApplicationRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ApplicationRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ApplicationRepositoryError::persistence)?
    }
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
    async fn store(&self, application: &Application) -> ApplicationRepositoryResult<()> {
        let application_id = application.id();
        let new_row = to_new_row(application);

        self.run_blocking(move |connection| {
            diesel::insert_into(applications::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ApplicationRepositoryError::DuplicateApplication(application_id)
                    }
                    _ => ApplicationRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, application: &Application) -> ApplicationRepositoryResult<()> {
        let application_id = application.id();
        let status = application.status().as_str().to_owned();
        let updated_at = application.updated_at();

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                applications::table.filter(applications::id.eq(application_id.into_inner())),
            )
            .set((
                applications::status.eq(status),
                applications::updated_at.eq(updated_at),
            ))
            .execute(connection)
            .map_err(ApplicationRepositoryError::persistence)?;

            if affected == 0 {
                return Err(ApplicationRepositoryError::NotFound(application_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: ApplicationId,
    ) -> ApplicationRepositoryResult<Option<Application>> {
        self.run_blocking(move |connection| {
            let row = applications::table
                .filter(applications::id.eq(id.into_inner()))
                .select(ApplicationRow::as_select())
                .first::<ApplicationRow>(connection)
                .optional()
                .map_err(ApplicationRepositoryError::persistence)?;
            row.map(row_to_application).transpose()
        })
        .await
    }

    async fn delete(&self, id: ApplicationId) -> ApplicationRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(
                applications::table.filter(applications::id.eq(id.into_inner())),
            )
            .execute(connection)
            .map_err(ApplicationRepositoryError::persistence)?;

            if affected == 0 {
                return Err(ApplicationRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// `PostgreSQL`-backed deployment store.
#[derive(Debug, Clone)]
pub struct PostgresDeploymentStore {
    pool: ApplicationPgPool,
}

impl PostgresDeploymentStore {
    /// Creates a new deployment store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ApplicationPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DeploymentStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DeploymentStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DeploymentStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DeploymentStoreError::persistence)?
    }
}

#[async_trait]
impl DeploymentStore for PostgresDeploymentStore {
    async fn create(
        &self,
        application_id: ApplicationId,
        strategy: &str,
    ) -> DeploymentStoreResult<Deployment> {
        let deployment = Deployment::new(application_id, strategy, &DefaultClock);
        let new_row = NewDeploymentRow {
            id: deployment.id().into_inner(),
            application_id: application_id.into_inner(),
            strategy: deployment.strategy().to_owned(),
            created_at: deployment.created_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(deployments::table)
                .values(&new_row)
                .execute(connection)
                .map_err(DeploymentStoreError::persistence)?;
            Ok(())
        })
        .await?;
        Ok(deployment)
    }

    async fn destroy_all_for(&self, application_id: ApplicationId) -> DeploymentStoreResult<usize> {
        self.run_blocking(move |connection| {
            diesel::delete(
                deployments::table
                    .filter(deployments::application_id.eq(application_id.into_inner())),
            )
            .execute(connection)
            .map_err(DeploymentStoreError::persistence)
        })
        .await
    }

    async fn list_for(
        &self,
        application_id: ApplicationId,
    ) -> DeploymentStoreResult<Vec<Deployment>> {
        self.run_blocking(move |connection| {
            let rows = deployments::table
                .filter(deployments::application_id.eq(application_id.into_inner()))
                .select(DeploymentRow::as_select())
                .load::<DeploymentRow>(connection)
                .map_err(DeploymentStoreError::persistence)?;
            Ok(rows.into_iter().map(row_to_deployment).collect())
        })
        .await
    }
}

fn to_new_row(application: &Application) -> NewApplicationRow {
    NewApplicationRow {
        id: application.id().into_inner(),
        name: application.name().as_str().to_owned(),
        status: application.status().as_str().to_owned(),
        created_at: application.created_at(),
        updated_at: application.updated_at(),
    }
}

fn row_to_application(row: ApplicationRow) -> ApplicationRepositoryResult<Application> {
    let ApplicationRow {
        id,
        name: persisted_name,
        status: persisted_status,
        created_at,
        updated_at,
    } = row;

    let name = ApplicationName::new(persisted_name)
        .map_err(ApplicationRepositoryError::invalid_persisted_data)?;
    let status = ApplicationStatus::try_from(persisted_status.as_str())
        .map_err(ApplicationRepositoryError::invalid_persisted_data)?;

    let data = PersistedApplicationData {
        id: ApplicationId::from_uuid(id),
        name,
        status,
        created_at,
        updated_at,
    };
    Ok(Application::from_persisted(data))
}

fn row_to_deployment(row: DeploymentRow) -> Deployment {
    Deployment::from_parts(
        DeploymentId::from_uuid(row.id),
        ApplicationId::from_uuid(row.application_id),
        row.strategy,
        row.created_at,
    )
}
