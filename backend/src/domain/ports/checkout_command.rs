//! Driving port for checkout.

use async_trait::async_trait;

use crate::domain::{CheckoutRequest, Error, Receipt};

/// Domain use-case port for completing a purchase.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckoutCommand: Send + Sync {
    /// Price the submitted lines, empty the cart, and issue a receipt.
    async fn checkout(&self, request: CheckoutRequest) -> Result<Receipt, Error>;
}
