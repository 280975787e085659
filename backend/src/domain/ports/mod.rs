//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (`*Repository`) are implemented by outbound persistence
//! adapters and report failures through typed error enums. Driving ports
//! (`*Query`, `*Command`) are implemented by domain services and consumed by
//! the HTTP adapter.

mod macros;
pub(crate) use macros::define_port_error;

mod cart_command;
mod cart_query;
mod cart_repository;
mod catalogue_query;
mod catalogue_seed_repository;
mod checkout_command;
mod checkout_repository;
mod product_repository;

pub use cart_command::{AddToCartRequest, CartCommand};
#[cfg(test)]
pub use cart_command::MockCartCommand;
pub use cart_query::CartQuery;
#[cfg(test)]
pub use cart_query::MockCartQuery;
pub use cart_repository::{CartRepository, CartRepositoryError};
#[cfg(test)]
pub use cart_repository::MockCartRepository;
pub use catalogue_query::CatalogueQuery;
#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_seed_repository::{
    CatalogueSeedRepository, CatalogueSeedRepositoryError, SeedingResult,
};
#[cfg(test)]
pub use catalogue_seed_repository::MockCatalogueSeedRepository;
pub use checkout_command::CheckoutCommand;
#[cfg(test)]
pub use checkout_command::MockCheckoutCommand;
pub use checkout_repository::{CheckoutRepository, CheckoutRepositoryError};
#[cfg(test)]
pub use checkout_repository::MockCheckoutRepository;
pub use product_repository::{ProductRepository, ProductRepositoryError};
#[cfg(test)]
pub use product_repository::MockProductRepository;
