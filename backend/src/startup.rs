//! Store preparation run before the listener binds.
//!
//! Migrations are applied, the pool is built, and an empty catalogue is
//! seeded. Any failure aborts startup.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::ports::SeedingResult;
use crate::domain::{CatalogueSeeder, CatalogueSeedingError};
use crate::outbound::persistence::{
    DbPool, DieselCatalogueSeedRepository, MigrationError, PoolConfig, PoolError,
    apply_migrations,
};

/// Errors that prevent the service from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Schema migrations failed.
    #[error("database migration failed: {0}")]
    Migration(#[from] MigrationError),
    /// The connection pool could not be built.
    #[error("database pool unavailable: {0}")]
    Pool(#[from] PoolError),
    /// Catalogue seeding failed.
    #[error("catalogue seeding failed: {0}")]
    Seeding(#[from] CatalogueSeedingError),
}

impl From<StartupError> for std::io::Error {
    fn from(err: StartupError) -> Self {
        Self::other(err)
    }
}

/// Seed the demo catalogue if the store has no products.
///
/// # Errors
///
/// Returns [`CatalogueSeedingError`] when persistence fails.
pub async fn seed_catalogue_on_startup(
    db_pool: &DbPool,
) -> Result<SeedingResult, CatalogueSeedingError> {
    let repository = DieselCatalogueSeedRepository::new(db_pool.clone());
    let result = CatalogueSeeder::new(Arc::new(repository)).seed().await?;
    match result {
        SeedingResult::Applied => info!("catalogue seeded with demo products"),
        SeedingResult::AlreadySeeded => info!("catalogue already populated; seeding skipped"),
    }
    Ok(result)
}

/// Migrate, pool, and seed the database at `pool_config.database_url()`.
///
/// # Examples
///
/// ```no_run
/// use storefront::outbound::persistence::PoolConfig;
/// use storefront::startup::prepare_store;
///
/// # async fn run() -> Result<(), storefront::startup::StartupError> {
/// let pool = prepare_store(PoolConfig::new("storefront.sqlite")).await?;
/// # drop(pool);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`StartupError`] when any step fails.
pub async fn prepare_store(pool_config: PoolConfig) -> Result<DbPool, StartupError> {
    let applied = apply_migrations(pool_config.database_url()).await?;
    info!(
        database_url = pool_config.database_url(),
        applied, "database migrations complete"
    );
    let pool = DbPool::new(pool_config).await?;
    seed_catalogue_on_startup(&pool).await?;
    Ok(pool)
}
