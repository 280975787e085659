//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn message_is_serialised_under_the_error_key() {
    let error = Error::invalid_request("Invalid productId or qty");
    let value = serde_json::to_value(&error).expect("serialise error");

    assert_eq!(value["error"], "Invalid productId or qty");
    assert_eq!(value["code"], "invalid_request");
    assert!(value.get("message").is_none());
    assert!(value.get("traceId").is_none());
    assert!(value.get("details").is_none());
}

#[rstest]
fn optional_fields_round_trip() {
    let error = Error::invalid_request("unknown product")
        .with_trace_id("00000000-0000-0000-0000-000000000000")
        .with_details(json!({ "field": "productId", "value": 42 }));

    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(value["traceId"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(value["details"]["field"], "productId");

    let decoded: Error = serde_json::from_value(value).expect("deserialise error");
    assert_eq!(decoded, error);
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id = TraceId::generate();
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;

    assert_eq!(error.trace_id(), Some(trace_id.to_string().as_str()));
}

#[rstest]
fn new_leaves_trace_id_empty_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}
