//! Handler tests for the cart endpoints.

use actix_web::http::StatusCode;
use actix_web::test;
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::Product;
use crate::inbound::http::test_utils::{MockPorts, test_app};

fn mug() -> Product {
    Product::new(ProductId::new(3).expect("id"), "Vibe Mug", Decimal::new(1_450, 2))
        .expect("product")
}

fn view_with_mugs(qty: i64) -> CartView {
    CartView::new(vec![CartItem::new(
        CartLineId::new(1).expect("line id"),
        Quantity::new(qty).expect("qty"),
        mug(),
    )])
}

async fn send(ports: MockPorts, request: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(test_app(ports.into_state())).await;
    let res = test::call_service(&app, request.to_request()).await;
    let status = res.status();
    (status, test::read_body_json(res).await)
}

#[actix_web::test]
async fn get_cart_renders_items_and_total() {
    let mut ports = MockPorts::default();
    ports
        .cart
        .expect_view_cart()
        .times(1)
        .return_once(|| Ok(view_with_mugs(2)));

    let (status, body) = send(ports, test::TestRequest::get().uri("/api/cart")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "items": [{"cartId": 1, "productId": 3, "qty": 2, "name": "Vibe Mug", "price": 14.5}],
            "total": 29.0,
        })
    );
}

#[actix_web::test]
async fn add_passes_validated_request_to_service() {
    let mut ports = MockPorts::default();
    let expected = AddToCartRequest {
        product_id: ProductId::new(3).expect("id"),
        quantity: Quantity::new(2).expect("qty"),
    };
    ports
        .cart_commands
        .expect_add_item()
        .with(eq(expected))
        .times(1)
        .return_once(|_| Ok(view_with_mugs(2)));

    let (status, body) = send(
        ports,
        test::TestRequest::post()
            .uri("/api/cart")
            .set_json(json!({"productId": 3, "qty": 2})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["qty"], 2);
}

#[rstest]
#[case(json!({"productId": 3, "qty": 0}), "qty", "not_positive_integer")]
#[case(json!({"productId": 3, "qty": -1}), "qty", "not_positive_integer")]
#[case(json!({"productId": 3}), "qty", "missing_field")]
#[case(json!({"qty": 1}), "productId", "missing_field")]
#[case(json!({"productId": null, "qty": 1}), "productId", "missing_field")]
#[case(json!({"productId": 0, "qty": 1}), "productId", "not_positive_integer")]
#[case(json!({"productId": "3", "qty": 1}), "productId", "not_positive_integer")]
#[case(json!({"productId": 1.5, "qty": 1}), "productId", "not_positive_integer")]
#[actix_web::test]
async fn add_rejects_invalid_fields_without_touching_cart(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let (status, body) = send(
        MockPorts::default(),
        test::TestRequest::post().uri("/api/cart").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], INVALID_ADD);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], code);
    assert!(body["traceId"].is_string());
}

#[actix_web::test]
async fn malformed_json_is_an_invalid_request() {
    let (status, body) = send(
        MockPorts::default(),
        test::TestRequest::post()
            .uri("/api/cart")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "malformed_json");
}

#[rstest]
#[case(json!({"qty": 0}), QuantityUpdate::Remove)]
#[case(json!({"qty": 4}), QuantityUpdate::Set(Quantity::new(4).expect("qty")))]
#[actix_web::test]
async fn patch_maps_qty_to_update(#[case] payload: Value, #[case] expected: QuantityUpdate) {
    let mut ports = MockPorts::default();
    ports
        .cart_commands
        .expect_update_quantity()
        .with(eq(CartLineId::new(1).expect("line id")), eq(expected))
        .times(1)
        .return_once(|_, _| Ok(CartView::default()));

    let (status, body) = send(
        ports,
        test::TestRequest::patch().uri("/api/cart/1").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"items": [], "total": 0.0}));
}

#[rstest]
#[case(json!({}), "missing_field")]
#[case(json!({"qty": null}), "missing_field")]
#[case(json!({"qty": -1}), "negative")]
#[case(json!({"qty": "2"}), "not_integer")]
#[actix_web::test]
async fn patch_rejects_invalid_qty(#[case] payload: Value, #[case] code: &str) {
    let (status, body) = send(
        MockPorts::default(),
        test::TestRequest::patch().uri("/api/cart/1").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], INVALID_QTY);
    assert_eq!(body["details"]["code"], code);
}

#[rstest]
#[case("/api/cart/0")]
#[case("/api/cart/-5")]
#[case("/api/cart/99999999999")]
#[actix_web::test]
async fn delete_of_impossible_line_returns_current_cart(#[case] uri: &str) {
    let mut ports = MockPorts::default();
    ports
        .cart
        .expect_view_cart()
        .times(1)
        .return_once(|| Ok(view_with_mugs(1)));

    let (status, body) = send(ports, test::TestRequest::delete().uri(uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["cartId"], 1);
}

#[actix_web::test]
async fn delete_removes_line_through_service() {
    let mut ports = MockPorts::default();
    ports
        .cart_commands
        .expect_remove_line()
        .with(eq(CartLineId::new(7).expect("line id")))
        .times(1)
        .return_once(|_| Ok(CartView::default()));

    let (status, _) = send(ports, test::TestRequest::delete().uri("/api/cart/7")).await;

    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn non_integer_path_id_is_an_invalid_request() {
    let (status, body) = send(
        MockPorts::default(),
        test::TestRequest::delete().uri("/api/cart/abc"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid cart id");
    assert_eq!(body["details"]["field"], "id");
}

#[actix_web::test]
async fn unknown_product_error_passes_through() {
    let mut ports = MockPorts::default();
    ports.cart_commands.expect_add_item().return_once(|_| {
        Err(Error::invalid_request("Unknown productId 42").with_details(json!({
            "field": "productId",
            "code": "unknown_product",
            "value": 42,
        })))
    });

    let (status, body) = send(
        ports,
        test::TestRequest::post()
            .uri("/api/cart")
            .set_json(json!({"productId": 42, "qty": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "unknown_product");
}
