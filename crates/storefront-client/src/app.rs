//! Storefront controller: local view state plus the actions a shopper can
//! take.
//!
//! The cart is only ever replaced by a fresh `GET /api/cart`; mutation
//! responses are never merged into local state.

use crate::api::StorefrontApi;
use crate::dto::{Cart, CartItem, CheckoutItem, Product, Receipt};
use crate::error::ClientError;

/// Name and email collected for checkout. Both must be non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    email: String,
}

impl Customer {
    /// Validate checkout details before any request is made.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCustomerField`] naming the first blank
    /// field.
    ///
    /// # Examples
    /// ```
    /// use storefront_client::Customer;
    ///
    /// assert!(Customer::new("Ada", "ada@example.com").is_ok());
    /// assert!(Customer::new("Ada", "  ").is_err());
    /// ```
    pub fn new(name: &str, email: &str) -> Result<Self, ClientError> {
        let trimmed_name = name.trim();
        if trimmed_name.is_empty() {
            return Err(ClientError::MissingCustomerField { field: "name" });
        }
        let trimmed_email = email.trim();
        if trimmed_email.is_empty() {
            return Err(ClientError::MissingCustomerField { field: "email" });
        }
        Ok(Self {
            name: trimmed_name.to_owned(),
            email: trimmed_email.to_owned(),
        })
    }

    /// Customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Customer email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Quantity sent when stepping a line down. Never negative; zero removes.
#[must_use]
pub const fn decremented(qty: u32) -> u32 {
    qty.saturating_sub(1)
}

/// Quantity sent when stepping a line up.
#[must_use]
pub const fn incremented(qty: u32) -> u32 {
    qty.saturating_add(1)
}

/// Shopper-facing state over a [`StorefrontApi`].
///
/// A failed action returns its error and leaves the held products and cart
/// as they were.
#[derive(Debug)]
pub struct Storefront {
    api: StorefrontApi,
    products: Vec<Product>,
    cart: Cart,
}

impl Storefront {
    /// Start with no products and an empty cart.
    #[must_use]
    pub fn new(api: StorefrontApi) -> Self {
        Self {
            api,
            products: Vec::new(),
            cart: Cart::default(),
        }
    }

    /// Products from the last successful load.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Cart from the last successful refresh.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Fetch the catalogue.
    ///
    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn load_products(&mut self) -> Result<&[Product], ClientError> {
        self.products = self.api.products().await?;
        Ok(&self.products)
    }

    /// Replace the local cart with the service's view.
    ///
    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn refresh_cart(&mut self) -> Result<&Cart, ClientError> {
        self.cart = self.api.cart().await?;
        Ok(&self.cart)
    }

    /// Add one unit of `product_id`, then refresh.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when the service rejects the product.
    pub async fn add(&mut self, product_id: i32) -> Result<&Cart, ClientError> {
        self.api.add_to_cart(product_id, 1).await?;
        self.refresh_cart().await
    }

    /// Raise a line's quantity by one, then refresh.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownCartLine`] when the line is not in the
    /// local cart.
    pub async fn increment(&mut self, cart_id: i32) -> Result<&Cart, ClientError> {
        let qty = incremented(self.line(cart_id)?.qty);
        self.api.set_quantity(cart_id, qty).await?;
        self.refresh_cart().await
    }

    /// Lower a line's quantity by one, then refresh. A line at one is
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownCartLine`] when the line is not in the
    /// local cart.
    pub async fn decrement(&mut self, cart_id: i32) -> Result<&Cart, ClientError> {
        let qty = decremented(self.line(cart_id)?.qty);
        self.api.set_quantity(cart_id, qty).await?;
        self.refresh_cart().await
    }

    /// Remove a line, then refresh.
    ///
    /// # Errors
    ///
    /// Propagates request failures.
    pub async fn remove(&mut self, cart_id: i32) -> Result<&Cart, ClientError> {
        self.api.remove_line(cart_id).await?;
        self.refresh_cart().await
    }

    /// Submit the local cart lines for checkout.
    ///
    /// On success the local cart is reset to empty and the receipt is handed
    /// back for display; it is not retained.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when the service rejects the checkout.
    pub async fn checkout(&mut self, customer: &Customer) -> Result<Receipt, ClientError> {
        let items: Vec<CheckoutItem> = self.cart.items.iter().map(CheckoutItem::from).collect();
        let receipt = self
            .api
            .checkout(&items, customer.name(), customer.email())
            .await?;
        self.cart = Cart::default();
        Ok(receipt)
    }

    fn line(&self, cart_id: i32) -> Result<&CartItem, ClientError> {
        self.cart
            .line(cart_id)
            .ok_or(ClientError::UnknownCartLine { cart_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, 2)]
    #[case(1, 0)]
    #[case(0, 0)]
    fn decrement_never_goes_negative(#[case] qty: u32, #[case] expected: u32) {
        assert_eq!(decremented(qty), expected);
    }

    #[rstest]
    #[case(1, 2)]
    #[case(u32::MAX, u32::MAX)]
    fn increment_saturates(#[case] qty: u32, #[case] expected: u32) {
        assert_eq!(incremented(qty), expected);
    }

    #[rstest]
    #[case("", "ada@example.com", "name")]
    #[case("   ", "ada@example.com", "name")]
    #[case("Ada", "", "email")]
    #[case("", "", "name")]
    fn blank_customer_fields_are_rejected(
        #[case] name: &str,
        #[case] email: &str,
        #[case] field: &str,
    ) {
        let result = Customer::new(name, email);
        assert!(matches!(
            result,
            Err(ClientError::MissingCustomerField { field: missing }) if missing == field
        ));
    }

    #[rstest]
    fn customer_fields_are_trimmed() {
        let customer = Customer::new(" Ada ", " ada@example.com").ok();
        assert_eq!(
            customer.as_ref().map(|c| (c.name(), c.email())),
            Some(("Ada", "ada@example.com"))
        );
    }

    #[tokio::test]
    async fn unknown_lines_are_reported_locally() {
        let Ok(client) = StorefrontApi::new("http://127.0.0.1:9") else {
            panic!("valid base url");
        };
        let mut storefront = Storefront::new(client);

        let result = storefront.decrement(7).await;

        assert!(matches!(
            result,
            Err(ClientError::UnknownCartLine { cart_id: 7 })
        ));
        assert!(storefront.cart().items.is_empty());
    }
}
