//! Cart

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

use crate::{
    items::CartItem,
    pricing::{PricingError, to_money, total_price},
};

/// Errors related to cart construction or quantity adjustment.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// No line item with the given id exists in the cart.
    #[error("item not found in cart: {0}")]
    ItemNotFound(String),

    /// A line item was supplied with a quantity of zero (index, item id).
    #[error("item {0} ({1}) has a quantity of zero")]
    ZeroQuantity(usize, String),

    /// Two line items share an id (index of the repeat, item id).
    #[error("item {0} ({1}) is already in the cart")]
    DuplicateItem(usize, String),
}

/// Cart
///
/// The total is never stored; [`Cart::total`] recomputes it from the line items
/// each time it is asked for.
#[derive(Clone, Debug, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: &'static Currency,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(iso::USD)
    }
}

impl Cart {
    /// Create a new empty cart priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Create a new cart with the given items.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] if any item has a quantity of zero, or
    /// [`CartError::DuplicateItem`] if an id appears more than once.
    pub fn with_items(
        items: impl Into<Vec<CartItem>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let items = items.into();

        items.iter().enumerate().try_for_each(|(i, item)| {
            if item.quantity == 0 {
                Err(CartError::ZeroQuantity(i, item.id.clone()))
            } else if items.iter().take(i).any(|earlier| earlier.id == item.id) {
                Err(CartError::DuplicateItem(i, item.id.clone()))
            } else {
                Ok(())
            }
        })?;

        Ok(Cart { items, currency })
    }

    /// Increase an item's quantity by one.
    ///
    /// Returns the new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if no item has the given id.
    pub fn increment(&mut self, id: &str) -> Result<u32, CartError> {
        let item = self.item_mut(id)?;

        item.quantity = item.quantity.saturating_add(1);

        Ok(item.quantity)
    }

    /// Decrease an item's quantity by one, stopping at 1.
    ///
    /// Items are never removed this way. Returns the new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if no item has the given id.
    pub fn decrement(&mut self, id: &str) -> Result<u32, CartError> {
        let item = self.item_mut(id)?;

        if item.quantity > 1 {
            item.quantity -= 1;
        }

        Ok(item.quantity)
    }

    /// Sum of price × quantity over the current items.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the arithmetic overflows.
    pub fn total_amount(&self) -> Result<Decimal, PricingError> {
        total_price(&self.items)
    }

    /// The cart total as money in the cart currency.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the arithmetic overflows or the amount cannot
    /// be represented in minor units.
    pub fn total(&self) -> Result<Money<'static, Currency>, PricingError> {
        to_money(self.total_amount()?, self.currency)
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get the number of line items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn item_mut(&mut self, id: &str) -> Result<&mut CartItem, CartError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CartError::ItemNotFound(id.to_string()))
    }
}
