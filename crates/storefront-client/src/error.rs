//! Error type for storefront client operations.

use thiserror::Error;

/// Failures surfaced to the terminal user as a single line.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured API URL cannot be used as a base URL.
    #[error("invalid API URL '{url}': {reason}")]
    InvalidApiUrl {
        /// URL as configured.
        url: String,
        /// Parser error message.
        reason: String,
    },
    /// The request never produced a response, or the body was unreadable.
    #[error("request failed: {source}")]
    Transport {
        /// Underlying HTTP client error.
        #[from]
        source: reqwest::Error,
    },
    /// The service answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Machine-readable error code, when the service sent one.
        code: Option<String>,
        /// Human-readable message from the error body.
        message: String,
    },
    /// A checkout field left blank.
    #[error("{field} is required to check out")]
    MissingCustomerField {
        /// Name of the blank field.
        field: &'static str,
    },
    /// The requested cart line is not in the current cart.
    #[error("no cart line with id {cart_id}")]
    UnknownCartLine {
        /// Line identifier as given.
        cart_id: i32,
    },
    /// Writing to the terminal failed.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Machine-readable code reported by the service, if any.
    #[must_use]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_render_message_and_status() {
        let err = ClientError::Api {
            status: 400,
            code: Some("invalid_request".to_owned()),
            message: "Invalid productId or qty".to_owned(),
        };
        assert_eq!(err.to_string(), "Invalid productId or qty (HTTP 400)");
        assert_eq!(err.api_code(), Some("invalid_request"));
    }

    #[test]
    fn missing_fields_name_the_field() {
        let err = ClientError::MissingCustomerField { field: "email" };
        assert_eq!(err.to_string(), "email is required to check out");
        assert!(err.api_code().is_none());
    }
}
