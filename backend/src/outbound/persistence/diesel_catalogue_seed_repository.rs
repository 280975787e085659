//! SQLite-backed catalogue seeding adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::NewProduct;
use crate::domain::ports::{CatalogueSeedRepository, CatalogueSeedRepositoryError, SeedingResult};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::NewProductRow;
use super::pool::{DbPool, PoolError};
use super::schema::products;

/// Diesel-backed implementation of [`CatalogueSeedRepository`].
#[derive(Clone)]
pub struct DieselCatalogueSeedRepository {
    pool: DbPool,
}

impl DieselCatalogueSeedRepository {
    /// Create a new seeding repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CatalogueSeedRepositoryError {
    map_basic_pool_error(error, CatalogueSeedRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CatalogueSeedRepositoryError {
    map_basic_diesel_error(
        error,
        CatalogueSeedRepositoryError::query,
        CatalogueSeedRepositoryError::connection,
    )
}

#[async_trait]
impl CatalogueSeedRepository for DieselCatalogueSeedRepository {
    async fn seed_if_empty(
        &self,
        seed: &[NewProduct],
    ) -> Result<SeedingResult, CatalogueSeedRepositoryError> {
        let rows = seed
            .iter()
            .map(NewProductRow::from_domain)
            .collect::<Result<Vec<_>, _>>()
            .map_err(CatalogueSeedRepositoryError::query)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                let existing: i64 = products::table.count().get_result(conn).await?;
                if existing > 0 {
                    return Ok(SeedingResult::AlreadySeeded);
                }

                // One row per statement keeps identifiers in seed order.
                for row in &rows {
                    diesel::insert_into(products::table)
                        .values(row)
                        .execute(conn)
                        .await?;
                }
                Ok(SeedingResult::Applied)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
