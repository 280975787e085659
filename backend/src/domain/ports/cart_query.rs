//! Driving port for reading the cart.

use async_trait::async_trait;

use crate::domain::{CartView, Error};

/// Domain use-case port for the current cart view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartQuery: Send + Sync {
    /// Lines joined with product data, plus the rounded total.
    async fn view_cart(&self) -> Result<CartView, Error>;
}
