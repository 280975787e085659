//! Terminal client for the storefront catalog and cart service.
//!
//! The client lists products, manages the shared cart, and checks out. It
//! holds no state of its own beyond the last views fetched: every mutation
//! is followed by a fresh read of the cart from the service.
//!
//! # Example
//!
//! ```no_run
//! use storefront_client::{Storefront, StorefrontApi, render};
//!
//! # async fn demo() -> Result<(), storefront_client::ClientError> {
//! let mut storefront = Storefront::new(StorefrontApi::new("http://localhost:4000")?);
//! let cart = storefront.add(1).await?;
//! render::write_cart(&mut std::io::stdout().lock(), cart)?;
//! # Ok(())
//! # }
//! ```

mod api;
mod app;
mod cli;
mod dto;
mod error;
pub mod render;

pub use api::StorefrontApi;
pub use app::{Customer, Storefront, decremented, incremented};
pub use cli::{Cli, Command, DEFAULT_API_URL, run};
pub use dto::{Cart, CartItem, CheckoutItem, Product, Receipt, ReceiptItem};
pub use error::ClientError;
