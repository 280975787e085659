//! HTTP inbound adapter exposing REST endpoints.

pub mod cart;
pub mod checkout;
pub mod error;
pub mod health;
pub mod products;
pub mod routes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

pub use crate::domain::ApiResult;
