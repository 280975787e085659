//! Tests for the checkout service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;

use super::*;
use crate::domain::ports::MockCheckoutRepository;
use crate::domain::{CheckoutLine, ErrorCode, Quantity};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

#[fixture]
fn clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

fn product(id: i64, name: &str, price: Decimal) -> Product {
    Product::new(ProductId::new(id).expect("id"), name, price).expect("product")
}

fn line(product: i64, qty: i64) -> CheckoutLine {
    CheckoutLine {
        product_id: ProductId::new(product).expect("id"),
        quantity: Quantity::new(qty).expect("qty"),
    }
}

#[rstest]
#[tokio::test]
async fn checkout_prices_lines_and_stamps_receipt(clock: Arc<dyn Clock>) {
    let mut repo = MockCheckoutRepository::new();
    repo.expect_resolve_and_clear()
        .withf(|ids| ids.iter().map(|id| id.get()).collect::<Vec<_>>() == vec![1, 2])
        .times(1)
        .return_once(|_| {
            Ok(vec![
                product(1, "Ten", Decimal::new(1_000, 2)),
                product(2, "Five and a quarter", Decimal::new(525, 2)),
            ])
        });

    let request = CheckoutRequest::new(
        vec![line(1, 2), line(2, 3)],
        Some("Ada".to_owned()),
        Some(String::new()),
    )
    .expect("request");

    let receipt = CheckoutService::new(Arc::new(repo), clock)
        .checkout(request)
        .await
        .expect("checkout succeeds");

    assert_eq!(receipt.total(), Decimal::new(3_575, 2));
    assert_eq!(receipt.items().len(), 2);
    assert_eq!(receipt.items()[1].amount, Decimal::new(1_575, 2));
    assert_eq!(receipt.name(), Some("Ada"));
    assert_eq!(receipt.email(), None);
    assert_eq!(receipt.timestamp(), fixture_timestamp());
    assert_eq!(receipt.id(), fixture_timestamp().timestamp_millis());
}

#[rstest]
#[tokio::test]
async fn repeated_products_are_priced_per_line(clock: Arc<dyn Clock>) {
    let mut repo = MockCheckoutRepository::new();
    repo.expect_resolve_and_clear()
        .times(1)
        .return_once(|_| Ok(vec![product(3, "Vibe Mug", Decimal::new(14_950, 2))]));

    let request = CheckoutRequest::new(vec![line(3, 1), line(3, 2)], None, None).expect("request");
    let receipt = CheckoutService::new(Arc::new(repo), clock)
        .checkout(request)
        .await
        .expect("checkout succeeds");

    assert_eq!(receipt.items().len(), 2);
    assert_eq!(receipt.total(), Decimal::new(44_850, 2));
}

#[rstest]
#[tokio::test]
async fn unknown_product_is_an_invalid_request(clock: Arc<dyn Clock>) {
    let mut repo = MockCheckoutRepository::new();
    repo.expect_resolve_and_clear()
        .times(1)
        .return_once(|_| Err(CheckoutRepositoryError::unknown_product(42)));

    let request = CheckoutRequest::new(vec![line(42, 1)], None, None).expect("request");
    let error = CheckoutService::new(Arc::new(repo), clock)
        .checkout(request)
        .await
        .expect_err("unknown product rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details().and_then(|d| d.get("value")),
        Some(&serde_json::json!(42))
    );
}

#[rstest]
#[tokio::test]
async fn connection_failure_is_service_unavailable(clock: Arc<dyn Clock>) {
    let mut repo = MockCheckoutRepository::new();
    repo.expect_resolve_and_clear()
        .times(1)
        .return_once(|_| Err(CheckoutRepositoryError::connection("pool closed")));

    let request = CheckoutRequest::new(vec![line(1, 1)], None, None).expect("request");
    let error = CheckoutService::new(Arc::new(repo), clock)
        .checkout(request)
        .await
        .expect_err("failure surfaces");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
