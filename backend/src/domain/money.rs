//! Currency arithmetic shared by the cart view and checkout.
//!
//! Amounts are exact decimals. Rounding happens only at the points the wire
//! contract fixes: each receipt line amount, the receipt total, and the cart
//! total. Two decimal places, halves away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

use super::Quantity;

/// Decimal places kept for every amount exposed to clients.
pub const CURRENCY_SCALE: u32 = 2;

/// Round `value` to whole cents.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use storefront::domain::round_currency;
///
/// assert_eq!(round_currency(Decimal::new(10_005, 3)), Decimal::new(1_001, 2));
/// ```
#[must_use]
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Unrounded `price × quantity`.
#[must_use]
pub fn extended_price(price: Decimal, quantity: Quantity) -> Decimal {
    price * Decimal::from(quantity.get())
}
