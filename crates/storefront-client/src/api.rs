//! HTTP client for the storefront service.

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::dto::{
    AddToCartBody, Cart, CheckoutBody, CheckoutItem, ErrorBody, Product, Receipt, ReceiptEnvelope,
    UpdateQuantityBody,
};
use crate::error::ClientError;

/// Typed access to the service's `/api` routes.
///
/// Each call is a single request with no retry.
#[derive(Debug, Clone)]
pub struct StorefrontApi {
    http: Client,
    base_url: String,
}

impl StorefrontApi {
    /// Build a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidApiUrl`] when `base_url` is not an
    /// absolute URL, and [`ClientError::Transport`] when the HTTP client
    /// cannot be initialised.
    ///
    /// # Examples
    /// ```
    /// use storefront_client::StorefrontApi;
    ///
    /// assert!(StorefrontApi::new("http://localhost:4000/").is_ok());
    /// assert!(StorefrontApi::new("localhost").is_err());
    /// ```
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|err| ClientError::InvalidApiUrl {
            url: base_url.to_owned(),
            reason: err.to_string(),
        })?;
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: trimmed.to_owned(),
        })
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    /// `GET /api/products`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request fails or the service rejects
    /// it.
    pub async fn products(&self) -> Result<Vec<Product>, ClientError> {
        decode(send(self.http.get(self.endpoint("products"))).await?).await
    }

    /// `GET /api/cart`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request fails or the service rejects
    /// it.
    pub async fn cart(&self) -> Result<Cart, ClientError> {
        decode(send(self.http.get(self.endpoint("cart"))).await?).await
    }

    /// `POST /api/cart`. The returned cart is discarded; callers re-fetch.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when the service rejects the product or
    /// quantity.
    pub async fn add_to_cart(&self, product_id: i32, qty: u32) -> Result<(), ClientError> {
        let request = self
            .http
            .post(self.endpoint("cart"))
            .json(&AddToCartBody { product_id, qty });
        accept(send(request).await?).await
    }

    /// `PATCH /api/cart/{cart_id}`. Zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request fails or the service rejects
    /// it.
    pub async fn set_quantity(&self, cart_id: i32, qty: u32) -> Result<(), ClientError> {
        let request = self
            .http
            .patch(self.endpoint(&format!("cart/{cart_id}")))
            .json(&UpdateQuantityBody { qty });
        accept(send(request).await?).await
    }

    /// `DELETE /api/cart/{cart_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request fails or the service rejects
    /// it.
    pub async fn remove_line(&self, cart_id: i32) -> Result<(), ClientError> {
        let request = self.http.delete(self.endpoint(&format!("cart/{cart_id}")));
        accept(send(request).await?).await
    }

    /// `POST /api/checkout` with the given lines and customer details.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when the service rejects the checkout;
    /// the service leaves the cart untouched in that case.
    pub async fn checkout(
        &self,
        items: &[CheckoutItem],
        name: &str,
        email: &str,
    ) -> Result<Receipt, ClientError> {
        let request = self.http.post(self.endpoint("checkout")).json(&CheckoutBody {
            cart_items: items,
            name,
            email,
        });
        let envelope: ReceiptEnvelope = decode(send(request).await?).await?;
        Ok(envelope.receipt)
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request.send().await?;
    debug!(
        url = %response.url(),
        status = response.status().as_u16(),
        "storefront response"
    );
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    Err(rejection(status, &response.text().await.unwrap_or_default()))
}

async fn accept(response: Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(rejection(status, &response.text().await.unwrap_or_default()))
}

fn rejection(status: StatusCode, body: &str) -> ClientError {
    serde_json::from_str::<ErrorBody>(body).map_or_else(
        |_| ClientError::Api {
            status: status.as_u16(),
            code: None,
            message: status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_owned(),
        },
        |error| ClientError::Api {
            status: status.as_u16(),
            code: error.code,
            message: error.error,
        },
    )
}
