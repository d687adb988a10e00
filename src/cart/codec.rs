//! Stored cart format
//!
//! The slot holds a JSON array of `{"id", "name", "price", "image", "quantity"}`
//! objects with prices in minor units. Prices written as decimal strings, the way
//! the catalog API returns them, are also accepted.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::Currency;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    items::LineItem,
    pricing::Price,
    products::{ProductId, ProductRef},
};

/// Errors decoding a stored cart.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The slot is not a JSON array of line items.
    #[error("stored cart is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A price is negative or not a number.
    #[error("product {product_id} has invalid price {value}")]
    InvalidPrice {
        /// Offending product
        product_id: ProductId,
        /// Stored value
        value: String,
    },

    /// A line has quantity 0.
    #[error("product {0} has quantity 0")]
    ZeroQuantity(ProductId),

    /// The lines do not form a valid cart.
    #[error(transparent)]
    Cart(#[from] CartError),
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredLineItem {
    id: ProductId,
    name: String,
    price: StoredPrice,
    #[serde(default)]
    image: String,
    quantity: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredPrice {
    Minor(i64),
    Decimal(String),
}

impl StoredPrice {
    fn to_minor_units(&self, currency: &Currency) -> Option<i64> {
        let minor = match self {
            StoredPrice::Minor(minor) => *minor,
            StoredPrice::Decimal(text) => {
                let amount = text.trim().parse::<Decimal>().ok()?;
                let scale = 10_i64.checked_pow(currency.exponent)?;

                amount
                    .checked_mul(Decimal::from(scale))?
                    .round_dp(0)
                    .to_i64()?
            }
        };

        (minor >= 0).then_some(minor)
    }

    fn describe(&self) -> String {
        match self {
            StoredPrice::Minor(minor) => minor.to_string(),
            StoredPrice::Decimal(text) => text.clone(),
        }
    }
}

impl From<&LineItem> for StoredLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.product_id(),
            name: item.name().to_string(),
            price: StoredPrice::Minor(item.unit_price().to_minor_units()),
            image: item.image_url().to_string(),
            quantity: item.quantity(),
        }
    }
}

/// Serialise the cart for the storage slot.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialisation fails.
pub fn encode(cart: &Cart) -> Result<String, serde_json::Error> {
    let stored: Vec<StoredLineItem> = cart.iter().map(StoredLineItem::from).collect();

    serde_json::to_string(&stored)
}

/// Rebuild a cart from the contents of the storage slot.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the contents are not a JSON array of line items, or
/// if the items break a cart invariant (zero quantity, negative price, duplicate
/// product).
pub fn decode(contents: &str, currency: &'static Currency) -> Result<Cart, DecodeError> {
    let stored: Vec<StoredLineItem> = serde_json::from_str(contents)?;

    let items = stored
        .into_iter()
        .map(|line| {
            let minor = line.price.to_minor_units(currency).ok_or_else(|| {
                DecodeError::InvalidPrice {
                    product_id: line.id,
                    value: line.price.describe(),
                }
            })?;

            let product = ProductRef {
                product_id: line.id,
                name: line.name,
                unit_price: Price::from_minor(minor, currency),
                image_url: line.image,
            };

            LineItem::restore(product, line.quantity).ok_or(DecodeError::ZeroQuantity(line.id))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Cart::with_items(items, currency)?)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::VND;
    use testresult::TestResult;

    use crate::{
        cart::{QuantityChange, codec},
        testing::product_ref,
    };

    use super::*;

    #[test]
    fn encode_writes_stored_shape() -> TestResult {
        let mut cart = Cart::new(VND);
        cart.add_item(product_ref(1, 25_000));

        assert_eq!(
            codec::encode(&cart)?,
            r#"[{"id":1,"name":"Product 1","price":25000,"image":"/media/products/1.jpg","quantity":1}]"#
        );

        Ok(())
    }

    #[test]
    fn decode_round_trips_encode() -> TestResult {
        let mut cart = Cart::new(VND);
        cart.add_item(product_ref(1, 25_000));
        cart.add_item(product_ref(2, 30_000));
        cart.change_quantity(ProductId::new(1), QuantityChange::Increase);

        let decoded = decode(&encode(&cart)?, VND)?;

        assert_eq!(decoded, cart);

        Ok(())
    }

    #[test]
    fn decode_accepts_decimal_string_prices() -> TestResult {
        let cart = decode(
            r#"[{"id":4,"name":"Trà đào","price":"35000.00","image":"","quantity":2}]"#,
            VND,
        )?;

        assert_eq!(cart.total_amount(), Price::from_minor(70_000, VND));

        Ok(())
    }

    #[test]
    fn decode_tolerates_missing_image() -> TestResult {
        let cart = decode(r#"[{"id":4,"name":"Trà đào","price":1,"quantity":1}]"#, VND)?;

        assert_eq!(cart.get(ProductId::new(4)).map(LineItem::image_url), Some(""));

        Ok(())
    }

    #[test]
    fn decode_rejects_malformed_contents() {
        assert!(matches!(decode("", VND), Err(DecodeError::Json(_))));
        assert!(matches!(decode("null", VND), Err(DecodeError::Json(_))));
        assert!(matches!(decode("{\"id\":1}", VND), Err(DecodeError::Json(_))));
    }

    #[test]
    fn decode_rejects_zero_quantity() {
        let result = decode(r#"[{"id":1,"name":"x","price":1,"quantity":0}]"#, VND);

        assert!(matches!(result, Err(DecodeError::ZeroQuantity(id)) if id == ProductId::new(1)));
    }

    #[test]
    fn decode_rejects_negative_price() {
        let result = decode(r#"[{"id":1,"name":"x","price":-5,"quantity":1}]"#, VND);

        assert!(matches!(result, Err(DecodeError::InvalidPrice { .. })));
    }

    #[test]
    fn decode_rejects_duplicate_products() {
        let result = decode(
            r#"[{"id":1,"name":"x","price":1,"quantity":1},{"id":1,"name":"x","price":1,"quantity":1}]"#,
            VND,
        );

        assert!(matches!(
            result,
            Err(DecodeError::Cart(CartError::DuplicateProduct(_)))
        ));
    }
}
