//! Port abstraction for seeding the catalogue at startup.

use async_trait::async_trait;

use crate::domain::NewProduct;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by catalogue seeding adapters.
    pub enum CatalogueSeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "catalogue seeding connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "catalogue seeding query failed: {message}",
    }
}

/// Result of attempting to seed the catalogue.
///
/// Callers treat `AlreadySeeded` as success; it only means a previous start
/// populated the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// Products were inserted.
    Applied,
    /// The catalogue already held products; nothing was inserted.
    AlreadySeeded,
}

/// Port for populating an empty catalogue.
///
/// The emptiness check and the inserts must run in one transaction so two
/// concurrent starts cannot both seed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueSeedRepository: Send + Sync {
    /// Insert `products` in order when no product exists yet.
    async fn seed_if_empty(
        &self,
        products: &[NewProduct],
    ) -> Result<SeedingResult, CatalogueSeedRepositoryError>;
}
