//! Catalogue browsing service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{CatalogueQuery, ProductRepository, ProductRepositoryError};
use crate::domain::{Error, Product};

fn map_repository_error(error: ProductRepositoryError) -> Error {
    match error {
        ProductRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("product repository unavailable: {message}"))
        }
        ProductRepositoryError::Query { message } => {
            Error::internal(format!("product repository error: {message}"))
        }
    }
}

/// Catalogue service implementing [`CatalogueQuery`].
#[derive(Clone)]
pub struct CatalogueService<R> {
    product_repo: Arc<R>,
}

impl<R> CatalogueService<R> {
    /// Create a new service over the product repository.
    pub fn new(product_repo: Arc<R>) -> Self {
        Self { product_repo }
    }
}

#[async_trait]
impl<R> CatalogueQuery for CatalogueService<R>
where
    R: ProductRepository,
{
    async fn list_products(&self) -> Result<Vec<Product>, Error> {
        self.product_repo
            .list_products()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockProductRepository;
    use crate::domain::{ErrorCode, ProductId};
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn list_products_passes_repository_rows_through() {
        let mug = Product::new(
            ProductId::new(3).expect("id"),
            "Vibe Mug",
            Decimal::new(14_950, 2),
        )
        .expect("product");
        let expected = vec![mug.clone()];

        let mut repo = MockProductRepository::new();
        repo.expect_list_products()
            .times(1)
            .return_once(move || Ok(vec![mug]));

        let products = CatalogueService::new(Arc::new(repo))
            .list_products()
            .await
            .expect("products listed");
        assert_eq!(products, expected);
    }

    #[rstest]
    #[case(ProductRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(ProductRepositoryError::query("syntax"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn repository_failures_map_to_domain_codes(
        #[case] failure: ProductRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockProductRepository::new();
        repo.expect_list_products()
            .times(1)
            .return_once(move || Err(failure));

        let error = CatalogueService::new(Arc::new(repo))
            .list_products()
            .await
            .expect_err("repository failure surfaces");
        assert_eq!(error.code(), expected);
    }
}
