//! Cart

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    items::LineItem,
    pricing::{Price, total_price},
    products::{ProductId, ProductRef},
};

pub mod codec;
pub mod lines;

pub use lines::{OrderLine, OrderLines};

/// Reasons a list of line items cannot form a cart.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Two line items share a product id.
    #[error("product {0} appears more than once")]
    DuplicateProduct(ProductId),

    /// A line item is priced in a different currency from the cart (product, item currency, cart currency).
    #[error("product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// Direction of a quantity change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuantityChange {
    /// Add one unit.
    Increase,

    /// Remove one unit, never going below 1.
    Decrease,
}

/// What a mutation did to the cart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added, either as a new line or by bumping an existing one.
    ItemAdded {
        /// Product that was added
        product_id: ProductId,
        /// Quantity of the line after the add
        quantity: u32,
    },

    /// The quantity of a line changed.
    QuantityChanged {
        /// Product whose line changed
        product_id: ProductId,
        /// New quantity
        quantity: u32,
    },

    /// A line was removed.
    ItemRemoved {
        /// Product that was removed
        product_id: ProductId,
    },

    /// Every line was removed.
    Cleared,
}

/// An ordered list of line items, at most one per product.
#[derive(Clone, Debug, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Create a cart from existing line items, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if two items share a product id or an item is priced
    /// in another currency.
    pub fn with_items(
        items: impl Into<Vec<LineItem>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let items = items.into();

        items.iter().enumerate().try_for_each(|(i, item)| {
            let item_currency = item.unit_price().currency();

            if item_currency != currency {
                return Err(CartError::CurrencyMismatch(
                    item.product_id(),
                    item_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            let duplicate = items
                .iter()
                .take(i)
                .any(|earlier| earlier.product_id() == item.product_id());

            if duplicate {
                Err(CartError::DuplicateProduct(item.product_id()))
            } else {
                Ok(())
            }
        })?;

        Ok(Cart { items, currency })
    }

    /// Add one unit of `product`, appending a new line if it is not in the cart yet.
    ///
    /// A product priced in another currency is ignored.
    pub fn add_item(&mut self, product: ProductRef) -> Option<CartEvent> {
        if product.unit_price.currency() != self.currency {
            return None;
        }

        let product_id = product.product_id;

        let quantity = if let Some(item) = self.get_mut(product_id) {
            item.increment();
            item.quantity()
        } else {
            self.items.push(LineItem::from(product));
            1
        };

        Some(CartEvent::ItemAdded {
            product_id,
            quantity,
        })
    }

    /// Change the quantity of a line by one unit.
    ///
    /// Decreasing a line that holds a single unit leaves it unchanged; use
    /// [`Cart::remove_item`] to drop it.
    pub fn change_quantity(
        &mut self,
        product_id: ProductId,
        change: QuantityChange,
    ) -> Option<CartEvent> {
        let item = self.get_mut(product_id)?;

        match change {
            QuantityChange::Increase => item.increment(),
            QuantityChange::Decrease => {
                if !item.decrement() {
                    return None;
                }
            }
        }

        Some(CartEvent::QuantityChanged {
            product_id,
            quantity: item.quantity(),
        })
    }

    /// Remove the line for `product_id`.
    pub fn remove_item(&mut self, product_id: ProductId) -> Option<CartEvent> {
        let position = self
            .items
            .iter()
            .position(|item| item.product_id() == product_id)?;

        self.items.remove(position);

        Some(CartEvent::ItemRemoved { product_id })
    }

    /// Remove every line.
    pub fn clear(&mut self) -> Option<CartEvent> {
        if self.items.is_empty() {
            return None;
        }

        self.items.clear();

        Some(CartEvent::Cleared)
    }

    /// Sum of the quantities of all lines.
    pub fn total_item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    /// Sum of the line totals.
    pub fn total_amount(&self) -> Price {
        total_price(&self.items, self.currency)
    }

    /// Product ids and quantities, in cart order, for an order submission.
    pub fn order_lines(&self) -> OrderLines<'_> {
        OrderLines::new(&self.items)
    }

    /// Get the line for `product_id`.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items
            .iter()
            .find(|item| item.product_id() == product_id)
    }

    /// Check whether the cart has a line for `product_id`.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of lines (not units).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency all lines are priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn get_mut(&mut self, product_id: ProductId) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|item| item.product_id() == product_id)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
