//! Checkout requests and receipts.
//!
//! A receipt is derived from the submitted lines and the catalogue at the
//! moment of checkout. It is handed back to the caller and never stored.

use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use super::{Product, ProductId, Quantity, extended_price, round_currency};

/// One submitted line: which product and how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Units purchased.
    pub quantity: Quantity,
}

/// Rejected checkout submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutRequestError {
    /// A checkout must purchase something.
    #[error("checkout requires at least one cart item")]
    NoLines,
}

/// Validated checkout submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    lines: Vec<CheckoutLine>,
    name: Option<String>,
    email: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl CheckoutRequest {
    /// Build a request. Blank customer fields are treated as absent.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::{CheckoutLine, CheckoutRequest, ProductId, Quantity};
    ///
    /// let line = CheckoutLine {
    ///     product_id: ProductId::new(1).expect("id"),
    ///     quantity: Quantity::ONE,
    /// };
    /// let request = CheckoutRequest::new(vec![line], Some("  ".into()), None).expect("lines");
    /// assert!(request.name().is_none());
    /// assert!(CheckoutRequest::new(Vec::new(), None, None).is_err());
    /// ```
    pub fn new(
        lines: Vec<CheckoutLine>,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, CheckoutRequestError> {
        if lines.is_empty() {
            return Err(CheckoutRequestError::NoLines);
        }
        Ok(Self {
            lines,
            name: non_blank(name),
            email: non_blank(email),
        })
    }

    /// Submitted lines, in submission order.
    #[must_use]
    pub fn lines(&self) -> &[CheckoutLine] {
        &self.lines
    }

    /// Distinct product identifiers referenced by the lines.
    #[must_use]
    pub fn product_ids(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = self.lines.iter().map(|line| line.product_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Customer name, if given.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Customer email, if given.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// A purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptItem {
    /// Purchased product.
    pub product_id: ProductId,
    /// Product name at checkout time.
    pub name: String,
    /// Unit price at checkout time.
    pub price: Decimal,
    /// Units purchased.
    pub quantity: Quantity,
    /// `price × quantity`, rounded to cents.
    pub amount: Decimal,
}

impl ReceiptItem {
    /// Price a line against its product.
    #[must_use]
    pub fn priced(product: &Product, quantity: Quantity) -> Self {
        Self {
            product_id: product.id(),
            name: product.name().to_owned(),
            price: product.price(),
            quantity,
            amount: round_currency(extended_price(product.price(), quantity)),
        }
    }
}

/// Receipt for a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    id: i64,
    name: Option<String>,
    email: Option<String>,
    items: Vec<ReceiptItem>,
    total: Decimal,
    timestamp: DateTime<Utc>,
}

impl Receipt {
    /// Assemble a receipt issued at `issued_at`.
    ///
    /// The issue time is truncated to milliseconds and doubles as the
    /// identifier (milliseconds since the Unix epoch). The total is the sum
    /// of the rounded line amounts, rounded.
    #[must_use]
    pub fn issue(
        issued_at: DateTime<Utc>,
        name: Option<String>,
        email: Option<String>,
        items: Vec<ReceiptItem>,
    ) -> Self {
        let issued_at = issued_at.trunc_subsecs(3);
        let total = round_currency(items.iter().map(|item| item.amount).sum());
        Self {
            id: issued_at.timestamp_millis(),
            name,
            email,
            items,
            total,
            timestamp: issued_at,
        }
    }

    /// Timestamp-derived identifier.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Customer name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Customer email.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Purchased lines.
    #[must_use]
    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    /// Rounded receipt total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Issue time.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
