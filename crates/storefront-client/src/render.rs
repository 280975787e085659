//! Terminal rendering for products, the cart, and receipts.

use std::io::{self, Write};
use std::ops::RangeFrom;

use rust_decimal::Decimal;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::dto::{Cart, Product, Receipt};

fn money(value: Decimal) -> String {
    format!("{value:.2}")
}

fn table(builder: Builder, numeric: RangeFrom<usize>) -> String {
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(numeric), Alignment::right());
    table.to_string()
}

/// Write the catalogue as a table.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_products(out: &mut impl Write, products: &[Product]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "No products available");
    }
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Price"]);
    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            money(product.price),
        ]);
    }
    writeln!(out, "{}", table(builder, 2..))
}

/// Write the cart lines and running total.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_cart(out: &mut impl Write, cart: &Cart) -> io::Result<()> {
    if cart.items.is_empty() {
        return writeln!(out, "Cart empty");
    }
    let mut builder = Builder::default();
    builder.push_record(["Line", "Product", "Name", "Price", "Qty"]);
    for item in &cart.items {
        builder.push_record([
            item.cart_id.to_string(),
            item.product_id.to_string(),
            item.name.clone(),
            money(item.price),
            item.qty.to_string(),
        ]);
    }
    writeln!(out, "{}", table(builder, 3..))?;
    writeln!(out, "Total: {}", money(cart.total))
}

/// Write a receipt once. Missing customer fields show as `-`.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_receipt(out: &mut impl Write, receipt: &Receipt) -> io::Result<()> {
    writeln!(out, "Receipt")?;
    writeln!(out, "Order id: {}", receipt.id)?;
    writeln!(out, "Name:     {}", receipt.name.as_deref().unwrap_or("-"))?;
    writeln!(out, "Email:    {}", receipt.email.as_deref().unwrap_or("-"))?;
    writeln!(out, "Time:     {}", receipt.timestamp)?;

    let mut builder = Builder::default();
    builder.push_record(["Product", "Name", "Price", "Qty", "Amount"]);
    for item in &receipt.items {
        builder.push_record([
            item.product_id.to_string(),
            item.name.clone(),
            money(item.price),
            item.qty.to_string(),
            money(item.amount),
        ]);
    }
    writeln!(out, "{}", table(builder, 2..))?;
    writeln!(out, "Total: {}", money(receipt.total))
}
