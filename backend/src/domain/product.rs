//! Catalogue products.
//!
//! Products are created once by the startup seeder and are read-only for the
//! rest of the process lifetime.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store-assigned product identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct ProductId(i32);

/// Reasons a raw value cannot be used as a [`ProductId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProductIdError {
    /// Zero or negative identifiers never name a product.
    #[error("product id must be positive, got {0}")]
    NotPositive(i64),
    /// The store uses 32-bit identifiers.
    #[error("product id {0} is out of range")]
    OutOfRange(i64),
}

impl ProductId {
    /// Validate a raw identifier.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::ProductId;
    ///
    /// assert_eq!(ProductId::new(3).map(ProductId::get), Ok(3));
    /// assert!(ProductId::new(0).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, ProductIdError> {
        if value <= 0 {
            return Err(ProductIdError::NotPositive(value));
        }
        i32::try_from(value)
            .map(Self)
            .map_err(|_| ProductIdError::OutOfRange(value))
    }

    /// Raw identifier as stored.
    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for ProductId {
    type Error = ProductIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for i32 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validation failures for product names and prices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductValidationError {
    /// Display names must contain something other than whitespace.
    #[error("product name must not be empty")]
    EmptyName,
    /// Unit prices are never negative.
    #[error("product price must not be negative, got {0}")]
    NegativePrice(Decimal),
}

fn validate(name: &str, price: Decimal) -> Result<(), ProductValidationError> {
    if name.trim().is_empty() {
        return Err(ProductValidationError::EmptyName);
    }
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ProductValidationError::NegativePrice(price));
    }
    Ok(())
}

/// A purchasable catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
}

impl Product {
    /// Build a product, rejecting blank names and negative prices.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
    ) -> Result<Self, ProductValidationError> {
        let name = name.into();
        validate(&name, price)?;
        Ok(Self { id, name, price })
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// A product awaiting insertion; the store assigns its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    name: String,
    price: Decimal,
}

impl NewProduct {
    /// Build an insertable product, applying the same rules as [`Product`].
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self, ProductValidationError> {
        let name = name.into();
        validate(&name, price)?;
        Ok(Self { name, price })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }
}
