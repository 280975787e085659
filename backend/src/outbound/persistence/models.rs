//! Diesel row types. Internal to the persistence adapters.

use diesel::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::domain::{
    CartItem, CartLineId, NewProduct, Product, ProductId, Quantity, round_currency,
};

use super::schema::{cart, products};

/// Stored product row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

impl ProductRow {
    /// Convert into the domain type, rejecting rows the schema should have
    /// prevented.
    pub fn into_domain(self) -> Result<Product, String> {
        let id = ProductId::new(i64::from(self.id)).map_err(|err| err.to_string())?;
        let price = Decimal::try_from(self.price)
            .map(round_currency)
            .map_err(|err| format!("stored price for product {id} is invalid: {err}"))?;
        Product::new(id, self.name, price).map_err(|err| err.to_string())
    }
}

/// Insertable product row.
#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow<'a> {
    pub name: &'a str,
    pub price: f64,
}

impl<'a> NewProductRow<'a> {
    pub fn from_domain(product: &'a NewProduct) -> Result<Self, String> {
        let price = product
            .price()
            .to_f64()
            .ok_or_else(|| format!("price {} cannot be stored", product.price()))?;
        Ok(Self {
            name: product.name(),
            price,
        })
    }
}

/// Insertable cart line.
#[derive(Debug, Insertable)]
#[diesel(table_name = cart)]
pub(crate) struct NewCartLineRow {
    pub product_id: i32,
    pub qty: i64,
}

/// Cart line joined with its product.
pub(crate) type CartItemRow = (i32, i64, ProductRow);

pub(crate) fn cart_item_from_row((line_id, qty, product): CartItemRow) -> Result<CartItem, String> {
    let line_id = CartLineId::new(i64::from(line_id)).map_err(|err| err.to_string())?;
    let quantity = Quantity::new(qty).map_err(|err| err.to_string())?;
    Ok(CartItem::new(line_id, quantity, product.into_domain()?))
}
