//! SQLite-backed checkout adapter.
//!
//! Product lookups and the cart wipe share one transaction: either every
//! submitted product resolves into a valid [`Product`] and the cart is
//! emptied, or nothing changes.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{CheckoutRepository, CheckoutRepositoryError};
use crate::domain::{Product, ProductId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::ProductRow;
use super::pool::{DbPool, PoolError};
use super::schema::{cart, products};

/// Diesel-backed implementation of [`CheckoutRepository`].
#[derive(Clone)]
pub struct DieselCheckoutRepository {
    pool: DbPool,
}

impl DieselCheckoutRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CheckoutRepositoryError {
    map_basic_pool_error(error, CheckoutRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CheckoutRepositoryError {
    map_basic_diesel_error(
        error,
        CheckoutRepositoryError::query,
        CheckoutRepositoryError::connection,
    )
}

/// Failure inside the checkout transaction.
enum CheckoutTxError {
    UnknownProduct(i32),
    InvalidRow(String),
    Diesel(diesel::result::Error),
}

impl From<diesel::result::Error> for CheckoutTxError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

fn first_missing(requested: &[i32], found: &[ProductRow]) -> Option<i32> {
    requested
        .iter()
        .copied()
        .find(|id| !found.iter().any(|row| row.id == *id))
}

#[async_trait]
impl CheckoutRepository for DieselCheckoutRepository {
    async fn resolve_and_clear(
        &self,
        product_ids: &[ProductId],
    ) -> Result<Vec<Product>, CheckoutRepositoryError> {
        let requested: Vec<i32> = product_ids.iter().map(|id| id.get()).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let outcome: Result<Vec<Product>, CheckoutTxError> = conn
            .transaction(|conn| {
                async move {
                    let rows: Vec<ProductRow> = products::table
                        .filter(products::id.eq_any(&requested))
                        .select(ProductRow::as_select())
                        .load(conn)
                        .await?;
                    if let Some(missing) = first_missing(&requested, &rows) {
                        return Err(CheckoutTxError::UnknownProduct(missing));
                    }
                    let resolved = rows
                        .into_iter()
                        .map(ProductRow::into_domain)
                        .collect::<Result<Vec<_>, _>>()
                        .map_err(CheckoutTxError::InvalidRow)?;

                    diesel::delete(cart::table).execute(conn).await?;
                    Ok::<_, CheckoutTxError>(resolved)
                }
                .scope_boxed()
            })
            .await;

        match outcome {
            Ok(products) => Ok(products),
            Err(CheckoutTxError::UnknownProduct(product_id)) => {
                Err(CheckoutRepositoryError::unknown_product(product_id))
            }
            Err(CheckoutTxError::InvalidRow(message)) => {
                Err(CheckoutRepositoryError::query(message))
            }
            Err(CheckoutTxError::Diesel(error)) => Err(map_diesel_error(error)),
        }
    }
}
