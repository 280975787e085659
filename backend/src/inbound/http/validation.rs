//! Request field validation shared by the cart and checkout handlers.
//!
//! Bodies are deserialised into loosely typed DTOs (`Option<Value>` fields)
//! and checked here, so a wrong type and a missing field produce the same
//! `invalid_request` payload instead of a generic JSON error.

use serde_json::{Value, json};

use crate::domain::Error;

/// Field-level validation failure codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldErrorCode {
    MissingField,
    NotInteger,
    NotPositiveInteger,
    Negative,
    OutOfRange,
    EmptyList,
}

impl FieldErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::NotInteger => "not_integer",
            Self::NotPositiveInteger => "not_positive_integer",
            Self::Negative => "negative",
            Self::OutOfRange => "out_of_range",
            Self::EmptyList => "empty_list",
        }
    }
}

/// Build an `invalid_request` error naming the offending field.
pub(crate) fn field_error(
    message: &str,
    field: impl Into<String>,
    code: FieldErrorCode,
    value: Option<&Value>,
) -> Error {
    let mut details = json!({
        "field": field.into(),
        "code": code.as_str(),
    });
    if let Some(value) = value {
        details["value"] = value.clone();
    }
    Error::invalid_request(message).with_details(details)
}

/// Strict integer: a JSON number with no fractional part.
///
/// `null` and absent fields yield `None`, as does anything that is not a
/// whole number (strings, `1.5`, booleans).
pub(crate) fn strict_integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
                .map(|f| f as i64)
        }),
        _ => None,
    }
}

/// Lenient positive integer: whole JSON numbers or numeric strings above
/// zero.
pub(crate) fn lenient_positive_integer(value: Option<&Value>) -> Option<i64> {
    let parsed = match value? {
        Value::String(text) => text.trim().parse::<i64>().ok(),
        other => strict_integer(Some(other)),
    };
    parsed.filter(|n| *n > 0)
}

/// Present, non-null field value.
pub(crate) fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Require a strictly positive JSON integer and convert it with `build`.
///
/// Absent or `null` values report `missing_field`; anything else that is not
/// a positive whole number reports `not_positive_integer`; values `build`
/// rejects report `out_of_range`.
pub(crate) fn required_positive<T, E>(
    message: &str,
    field: &str,
    value: Option<&Value>,
    build: impl FnOnce(i64) -> Result<T, E>,
) -> Result<T, Error> {
    let Some(value) = present(value) else {
        return Err(field_error(message, field, FieldErrorCode::MissingField, None));
    };
    let Some(number) = strict_integer(Some(value)).filter(|n| *n > 0) else {
        return Err(field_error(
            message,
            field,
            FieldErrorCode::NotPositiveInteger,
            Some(value),
        ));
    };
    build(number).map_err(|_| field_error(message, field, FieldErrorCode::OutOfRange, Some(value)))
}
