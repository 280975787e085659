//! Storefront domain: catalogue, cart, and checkout.
//!
//! Purpose: define the strongly typed entities the HTTP and persistence
//! adapters exchange, the ports that connect them, and the services that
//! implement the use cases. Nothing here knows about actix or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - Product, CartItem, CartView, Receipt — catalogue and cart state.
//! - CatalogueService, CartService, CheckoutService — driving port
//!   implementations.
//! - CatalogueSeeder — startup seeding of the demo catalogue.

pub mod cart;
pub mod cart_service;
pub mod catalogue_seed;
pub mod catalogue_service;
pub mod checkout;
pub mod checkout_service;
pub mod error;
pub mod money;
pub mod ports;
pub mod product;
pub mod trace_id;

pub use self::cart::{
    CartItem, CartLineId, CartLineIdError, CartView, Quantity, QuantityError, QuantityUpdate,
};
pub use self::cart_service::CartService;
pub use self::catalogue_seed::{
    CatalogueSeeder, CatalogueSeedingError, SEED_PRODUCTS, seed_products,
};
pub use self::catalogue_service::CatalogueService;
pub use self::checkout::{
    CheckoutLine, CheckoutRequest, CheckoutRequestError, Receipt, ReceiptItem,
};
pub use self::checkout_service::CheckoutService;
pub use self::error::{Error, ErrorCode};
pub use self::money::{CURRENCY_SCALE, extended_price, round_currency};
pub use self::product::{NewProduct, Product, ProductId, ProductIdError, ProductValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for driving ports.
pub type ApiResult<T> = Result<T, Error>;
