//! SQLite-backed cart adapter.
//!
//! Adding to the cart is a single upsert on the `cart.product_id` unique
//! key, run in a transaction after confirming the product exists. The
//! unique constraint keeps one line per product even when two requests race.
//! The merged quantity is checked before commit so no line ever holds more
//! than [`Quantity`] can represent.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{CartRepository, CartRepositoryError};
use crate::domain::{CartItem, CartLineId, ProductId, Quantity};

use super::diesel_basic_error_mapping::{
    is_foreign_key_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{CartItemRow, NewCartLineRow, ProductRow, cart_item_from_row};
use super::pool::{DbPool, PoolError};
use super::schema::{cart, products};

/// Diesel-backed implementation of [`CartRepository`].
#[derive(Clone)]
pub struct DieselCartRepository {
    pool: DbPool,
}

impl DieselCartRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CartRepositoryError {
    map_basic_pool_error(error, CartRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CartRepositoryError {
    map_basic_diesel_error(
        error,
        CartRepositoryError::query,
        CartRepositoryError::connection,
    )
}

/// Failure inside the add-to-cart transaction.
enum AddError {
    UnknownProduct,
    Overflow(i64),
    Diesel(diesel::result::Error),
}

impl From<diesel::result::Error> for AddError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

fn quantity_column(quantity: Quantity) -> i64 {
    i64::from(quantity.get())
}

const MAX_LINE_QUANTITY: i64 = u32::MAX as i64;

#[async_trait]
impl CartRepository for DieselCartRepository {
    async fn list_items(&self) -> Result<Vec<CartItem>, CartRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CartItemRow> = cart::table
            .inner_join(products::table)
            .select((cart::id, cart::qty, ProductRow::as_select()))
            .order(cart::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|row| cart_item_from_row(row).map_err(CartRepositoryError::query))
            .collect()
    }

    async fn add_quantity(
        &self,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<(), CartRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewCartLineRow {
            product_id: product_id.get(),
            qty: quantity_column(quantity),
        };

        let outcome: Result<(), AddError> = conn
            .transaction(|conn| {
                async move {
                    let exists: i64 = products::table
                        .filter(products::id.eq(row.product_id))
                        .count()
                        .get_result(conn)
                        .await?;
                    if exists == 0 {
                        return Err(AddError::UnknownProduct);
                    }

                    diesel::insert_into(cart::table)
                        .values(&row)
                        .on_conflict(cart::product_id)
                        .do_update()
                        .set(cart::qty.eq(cart::qty + excluded(cart::qty)))
                        .execute(conn)
                        .await?;

                    let merged: i64 = cart::table
                        .filter(cart::product_id.eq(row.product_id))
                        .select(cart::qty)
                        .first(conn)
                        .await?;
                    if merged > MAX_LINE_QUANTITY {
                        return Err(AddError::Overflow(merged));
                    }
                    Ok::<(), AddError>(())
                }
                .scope_boxed()
            })
            .await;

        match outcome {
            Ok(()) => Ok(()),
            Err(AddError::UnknownProduct) => {
                Err(CartRepositoryError::unknown_product(product_id.get()))
            }
            Err(AddError::Overflow(requested)) => Err(CartRepositoryError::quantity_overflow(
                product_id.get(),
                requested,
            )),
            Err(AddError::Diesel(error)) if is_foreign_key_violation(&error) => {
                Err(CartRepositoryError::unknown_product(product_id.get()))
            }
            Err(AddError::Diesel(error)) => Err(map_diesel_error(error)),
        }
    }

    async fn set_quantity(
        &self,
        line_id: CartLineId,
        quantity: Quantity,
    ) -> Result<(), CartRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(cart::table.filter(cart::id.eq(line_id.get())))
            .set(cart::qty.eq(quantity_column(quantity)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn remove_line(&self, line_id: CartLineId) -> Result<(), CartRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(cart::table.filter(cart::id.eq(line_id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
