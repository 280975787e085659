//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on driving ports and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{CartCommand, CartQuery, CatalogueQuery, CheckoutCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Product listing.
    pub catalogue: Arc<dyn CatalogueQuery>,
    /// Cart reads.
    pub cart: Arc<dyn CartQuery>,
    /// Cart mutations.
    pub cart_commands: Arc<dyn CartCommand>,
    /// Checkout.
    pub checkout: Arc<dyn CheckoutCommand>,
}

impl HttpState {
    /// Bundle the port implementations.
    pub fn new(
        catalogue: Arc<dyn CatalogueQuery>,
        cart: Arc<dyn CartQuery>,
        cart_commands: Arc<dyn CartCommand>,
        checkout: Arc<dyn CheckoutCommand>,
    ) -> Self {
        Self {
            catalogue,
            cart,
            cart_commands,
            checkout,
        }
    }
}
