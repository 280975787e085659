//! Startup seeding of the product catalogue.
//!
//! A fresh store receives the five demo products in a fixed order so their
//! identifiers are `1..=5`. Later starts find the catalogue populated and
//! leave it alone.

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::ports::{CatalogueSeedRepository, CatalogueSeedRepositoryError, SeedingResult};
use crate::domain::{NewProduct, ProductValidationError};

/// Demo catalogue as `(name, price in cents)`, in insertion order.
pub const SEED_PRODUCTS: [(&str, i64); 5] = [
    ("Vibe T-shirt", 24_999),
    ("Vibe Hoodie", 79_900),
    ("Vibe Mug", 14_950),
    ("Vibe Cap", 19_975),
    ("Vibe Stickers (Pack)", 4_990),
];

/// Build the seed products.
pub fn seed_products() -> Result<Vec<NewProduct>, ProductValidationError> {
    SEED_PRODUCTS
        .iter()
        .map(|(name, cents)| NewProduct::new(*name, Decimal::new(*cents, 2)))
        .collect()
}

/// Errors raised while seeding the catalogue.
#[derive(Debug, Error)]
pub enum CatalogueSeedingError {
    /// A built-in seed product failed validation.
    #[error("invalid seed product: {0}")]
    InvalidProduct(#[from] ProductValidationError),
    /// Persistence adapter failed while seeding.
    #[error("catalogue persistence error: {0}")]
    Persistence(#[from] CatalogueSeedRepositoryError),
}

/// Service that seeds an empty catalogue.
#[derive(Clone)]
pub struct CatalogueSeeder<R> {
    repository: Arc<R>,
}

impl<R> CatalogueSeeder<R> {
    /// Create a new seeder with the given persistence adapter.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> CatalogueSeeder<R>
where
    R: CatalogueSeedRepository,
{
    /// Insert the demo products unless the catalogue already has some.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueSeedingError`] when persistence fails.
    pub async fn seed(&self) -> Result<SeedingResult, CatalogueSeedingError> {
        let products = seed_products()?;
        Ok(self.repository.seed_if_empty(&products).await?)
    }
}
