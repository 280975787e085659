//! Client behaviour against a real in-process service on an ephemeral port.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::net::TcpListener;

use actix_web::dev::ServerHandle;
use actix_web::web;
use rust_decimal::Decimal;
use storefront::inbound::http::health::HealthState;
use storefront::outbound::persistence::PoolConfig;
use storefront::server::{ServerConfig, create_server};
use storefront::startup::prepare_store;
use storefront_client::{
    Cli, ClientError, Command, Customer, Storefront, StorefrontApi, run,
};
use tempfile::TempDir;

/// A seeded service listening on `127.0.0.1` until stopped.
struct RunningService {
    base_url: String,
    handle: ServerHandle,
    _dir: TempDir,
}

impl RunningService {
    async fn start() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let url = dir.path().join("storefront.sqlite").display().to_string();
        let pool = prepare_store(PoolConfig::new(url).with_max_size(2))
            .await
            .expect("prepare store");
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let config = ServerConfig::new(addr, pool).with_listener(listener);
        let server =
            create_server(web::Data::new(HealthState::new()), config).expect("create server");
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Self {
            base_url: format!("http://{addr}"),
            handle,
            _dir: dir,
        }
    }

    fn storefront(&self) -> Storefront {
        Storefront::new(StorefrontApi::new(&self.base_url).expect("api url"))
    }

    async fn run(&self, command: Command) -> Result<String, ClientError> {
        let cli = Cli {
            api_url: self.base_url.clone(),
            command,
        };
        let mut out = Vec::new();
        run(&cli, &mut out).await?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    async fn stop(self) {
        self.handle.stop(true).await;
    }
}

fn customer() -> Customer {
    Customer::new("Ada", "ada@example.com").expect("customer")
}

#[actix_web::test]
async fn lists_the_seeded_catalogue() {
    let service = RunningService::start().await;
    let mut storefront = service.storefront();

    let products = storefront.load_products().await.expect("products");

    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names.len(), 5);
    assert_eq!(names.first().copied(), Some("Vibe T-shirt"));
    assert_eq!(storefront.products().len(), 5);
    service.stop().await;
}

#[actix_web::test]
async fn adding_twice_merges_into_one_line() {
    let service = RunningService::start().await;
    let mut storefront = service.storefront();

    storefront.add(3).await.expect("first add");
    let cart = storefront.add(3).await.expect("second add");

    assert_eq!(cart.items.len(), 1);
    let line = cart.items.first().expect("line");
    assert_eq!((line.product_id, line.qty), (3, 2));
    assert_eq!(cart.total, line.price * Decimal::from(2));
    service.stop().await;
}

#[actix_web::test]
async fn increment_and_decrement_step_by_one() {
    let service = RunningService::start().await;
    let mut storefront = service.storefront();
    let cart_id = storefront
        .add(2)
        .await
        .expect("add")
        .items
        .first()
        .expect("line")
        .cart_id;

    let raised = storefront.increment(cart_id).await.expect("increment");
    assert_eq!(raised.line(cart_id).map(|line| line.qty), Some(2));

    let lowered = storefront.decrement(cart_id).await.expect("decrement");
    assert_eq!(lowered.line(cart_id).map(|line| line.qty), Some(1));

    let emptied = storefront.decrement(cart_id).await.expect("decrement to zero");
    assert!(emptied.items.is_empty());
    assert_eq!(emptied.total, Decimal::ZERO);
    service.stop().await;
}

#[actix_web::test]
async fn remove_drops_the_line() {
    let service = RunningService::start().await;
    let mut storefront = service.storefront();
    storefront.add(1).await.expect("add tee");
    let cart_id = storefront
        .add(4)
        .await
        .expect("add second product")
        .items
        .last()
        .expect("line")
        .cart_id;

    let cart = storefront.remove(cart_id).await.expect("remove");

    let products: Vec<i32> = cart.items.iter().map(|item| item.product_id).collect();
    assert_eq!(products, vec![1]);
    service.stop().await;
}

#[actix_web::test]
async fn unknown_products_are_rejected_without_touching_state() {
    let service = RunningService::start().await;
    let mut storefront = service.storefront();
    storefront.add(1).await.expect("add");
    let before = storefront.cart().clone();

    let err = storefront.add(99).await.expect_err("unknown product");

    assert!(matches!(err, ClientError::Api { status: 400, .. }));
    assert_eq!(err.api_code(), Some("invalid_request"));
    assert_eq!(storefront.cart(), &before);
    service.stop().await;
}

#[actix_web::test]
async fn checkout_returns_a_receipt_and_empties_the_cart() {
    let service = RunningService::start().await;
    let mut storefront = service.storefront();
    storefront.add(5).await.expect("add");
    let cart_id = storefront.cart().items.first().expect("line").cart_id;
    storefront.increment(cart_id).await.expect("increment");
    let expected_total = storefront.cart().total;

    let receipt = storefront.checkout(&customer()).await.expect("checkout");

    assert_eq!(receipt.name.as_deref(), Some("Ada"));
    assert_eq!(receipt.email.as_deref(), Some("ada@example.com"));
    assert_eq!(receipt.total, expected_total);
    assert_eq!(receipt.items.first().map(|item| item.qty), Some(2));
    assert!(storefront.cart().items.is_empty());
    let remote = storefront.refresh_cart().await.expect("refresh");
    assert!(remote.items.is_empty());
    service.stop().await;
}

#[actix_web::test]
async fn checkout_of_an_empty_cart_is_rejected() {
    let service = RunningService::start().await;
    let mut storefront = service.storefront();

    let err = storefront
        .checkout(&customer())
        .await
        .expect_err("empty cart");

    assert_eq!(err.to_string(), "Cart empty (HTTP 400)");
    service.stop().await;
}

#[actix_web::test]
async fn cli_commands_render_the_refreshed_cart() {
    let service = RunningService::start().await;

    let added = service
        .run(Command::Add { product_id: 3 })
        .await
        .expect("add");
    assert!(added.contains("Vibe Mug"));
    assert!(added.contains("Total:"));

    let products = service.run(Command::Products).await.expect("products");
    assert!(products.contains("Vibe T-shirt"));

    let receipt = service
        .run(Command::Checkout {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
        })
        .await
        .expect("checkout");
    assert!(receipt.contains("Order id:"));
    assert!(receipt.contains("Name:     Ada"));

    let cart = service.run(Command::Cart).await.expect("cart");
    assert_eq!(cart, "Cart empty\n");
    service.stop().await;
}

#[actix_web::test]
async fn cli_reports_missing_lines() {
    let service = RunningService::start().await;

    let err = service
        .run(Command::Increment { cart_id: 42 })
        .await
        .expect_err("no such line");

    assert_eq!(err.to_string(), "no cart line with id 42");
    service.stop().await;
}
