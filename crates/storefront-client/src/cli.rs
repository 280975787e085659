//! Command-line surface of the `storefront` binary.

use std::io::Write;

use clap::{Parser, Subcommand};

use crate::api::StorefrontApi;
use crate::app::{Customer, Storefront};
use crate::error::ClientError;
use crate::render::{write_cart, write_products, write_receipt};

/// Service URL used when neither `--api-url` nor `STOREFRONT_API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Browse the catalogue, manage the shared cart, and check out.
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront", version, about)]
pub struct Cli {
    /// Base URL of the storefront service.
    #[arg(long, env = "STOREFRONT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
    /// Action to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Shopper actions.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the catalogue.
    Products,
    /// Show the cart and its total.
    Cart,
    /// Add one unit of a product, then show the cart.
    Add {
        /// Catalogue product id.
        product_id: i32,
    },
    /// Raise a cart line's quantity by one.
    Increment {
        /// Cart line id.
        cart_id: i32,
    },
    /// Lower a cart line's quantity by one; a line at one is removed.
    Decrement {
        /// Cart line id.
        cart_id: i32,
    },
    /// Remove a cart line.
    Remove {
        /// Cart line id.
        cart_id: i32,
    },
    /// Check out the current cart and print the receipt.
    Checkout {
        /// Customer name.
        #[arg(long, default_value = "")]
        name: String,
        /// Customer email.
        #[arg(long, default_value = "")]
        email: String,
    },
}

/// Execute one command against the service, writing its view to `out`.
///
/// # Errors
///
/// Returns the first [`ClientError`] met; nothing further is attempted.
pub async fn run(cli: &Cli, out: &mut impl Write) -> Result<(), ClientError> {
    let mut storefront = Storefront::new(StorefrontApi::new(&cli.api_url)?);
    match &cli.command {
        Command::Products => {
            write_products(out, storefront.load_products().await?)?;
        }
        Command::Cart => {
            write_cart(out, storefront.refresh_cart().await?)?;
        }
        Command::Add { product_id } => {
            write_cart(out, storefront.add(*product_id).await?)?;
        }
        Command::Increment { cart_id } => {
            storefront.refresh_cart().await?;
            write_cart(out, storefront.increment(*cart_id).await?)?;
        }
        Command::Decrement { cart_id } => {
            storefront.refresh_cart().await?;
            write_cart(out, storefront.decrement(*cart_id).await?)?;
        }
        Command::Remove { cart_id } => {
            write_cart(out, storefront.remove(*cart_id).await?)?;
        }
        Command::Checkout { name, email } => {
            let customer = Customer::new(name, email)?;
            storefront.refresh_cart().await?;
            let receipt = storefront.checkout(&customer).await?;
            write_receipt(out, &receipt)?;
        }
    }
    Ok(())
}
