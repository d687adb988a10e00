//! Items

use crate::{
    pricing::{Price, line_total},
    products::{ProductId, ProductRef},
};

/// One product in the cart, with the display fields captured when it was added.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem {
    product_id: ProductId,
    name: String,
    unit_price: Price,
    image_url: String,
    quantity: u32,
}

impl LineItem {
    /// Restores a line item from its stored fields.
    ///
    /// Returns `None` for a zero quantity, which no line item may hold.
    pub fn restore(product: ProductRef, quantity: u32) -> Option<Self> {
        (quantity > 0).then(|| Self {
            product_id: product.product_id,
            name: product.name,
            unit_price: product.unit_price,
            image_url: product.image_url,
            quantity,
        })
    }

    /// Returns the catalog id of the product.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the product name captured at add-time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price captured at add-time.
    pub fn unit_price(&self) -> &Price {
        &self.unit_price
    }

    /// Returns the image URL captured at add-time.
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Returns the quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the unit price multiplied by the quantity.
    pub fn line_total(&self) -> Price {
        line_total(&self.unit_price, self.quantity)
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Decrements the quantity unless it is already 1.
    pub(crate) fn decrement(&mut self) -> bool {
        if self.quantity > 1 {
            self.quantity -= 1;
            true
        } else {
            false
        }
    }
}

impl From<ProductRef> for LineItem {
    fn from(product: ProductRef) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name,
            unit_price: product.unit_price,
            image_url: product.image_url,
            quantity: 1,
        }
    }
}
