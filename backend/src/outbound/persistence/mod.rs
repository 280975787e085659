//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by SQLite
//! through Diesel with async access via `diesel-async` and `bb8` pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types. Pricing and validation live in the domain.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: Diesel and pool failures are mapped to each
//!   port's error enum.
//!
//! # Example
//!
//! ```no_run
//! use storefront::outbound::persistence::{
//!     DbPool, DieselProductRepository, PoolConfig, apply_migrations,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! apply_migrations("storefront.sqlite").await?;
//! let pool = DbPool::new(PoolConfig::new("storefront.sqlite")).await?;
//! let repo = DieselProductRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_cart_repository;
mod diesel_catalogue_seed_repository;
mod diesel_checkout_repository;
mod diesel_product_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_cart_repository::DieselCartRepository;
pub use diesel_catalogue_seed_repository::DieselCatalogueSeedRepository;
pub use diesel_checkout_repository::DieselCheckoutRepository;
pub use diesel_product_repository::DieselProductRepository;
pub use migrations::{MigrationError, apply_migrations, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError, SqliteConn};
