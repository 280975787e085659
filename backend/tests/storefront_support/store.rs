//! Temporary SQLite stores for integration suites.

use std::sync::Arc;

use rust_decimal::Decimal;
use storefront::domain::NewProduct;
use storefront::domain::ports::CatalogueSeedRepository;
use storefront::outbound::persistence::{
    DbPool, DieselCatalogueSeedRepository, PoolConfig, apply_migrations,
};
use storefront::startup::prepare_store;
use tempfile::TempDir;

/// A migrated database living in a temporary directory.
///
/// The directory is removed when the last clone is dropped.
#[derive(Clone)]
pub struct TestStore {
    pub pool: DbPool,
    _dir: Arc<TempDir>,
}

fn temp_database() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let url = dir.path().join("storefront.sqlite").display().to_string();
    (dir, url)
}

/// Prepare a store exactly as the server does at startup, demo catalogue
/// included.
pub async fn seeded_store() -> TestStore {
    let (dir, url) = temp_database();
    let pool = prepare_store(PoolConfig::new(url).with_max_size(2))
        .await
        .expect("prepare store");
    TestStore {
        pool,
        _dir: Arc::new(dir),
    }
}

/// Prepare a migrated store holding only the given `(name, cents)` products,
/// with ids assigned from 1 in order.
pub async fn store_with_products(products: &[(&str, i64)]) -> TestStore {
    let (dir, url) = temp_database();
    apply_migrations(&url).await.expect("migrations");
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(2))
        .await
        .expect("pool");
    let seed: Vec<NewProduct> = products
        .iter()
        .map(|(name, cents)| NewProduct::new(*name, Decimal::new(*cents, 2)).expect("product"))
        .collect();
    DieselCatalogueSeedRepository::new(pool.clone())
        .seed_if_empty(&seed)
        .await
        .expect("seed");
    TestStore {
        pool,
        _dir: Arc::new(dir),
    }
}
