//! Storefront backend: catalogue listing, a shared cart, and mock checkout
//! over HTTP, backed by SQLite.
//!
//! The crate follows a hexagonal layout: [`domain`] holds types, ports, and
//! services; [`inbound::http`] adapts them to actix-web; and
//! [`outbound::persistence`] implements the repository ports with Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod startup;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware.
pub use middleware::Trace;
