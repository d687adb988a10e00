//! Order lines

use std::{iter::FusedIterator, slice};

use serde::{Deserialize, Serialize};

use crate::{items::LineItem, products::ProductId};

/// A product id and quantity, as sent in an order request.
///
/// Prices are left out; the server prices the order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product to order
    pub product_id: ProductId,

    /// Number of units
    pub quantity: u32,
}

impl From<&LineItem> for OrderLine {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id(),
            quantity: item.quantity(),
        }
    }
}

/// A view over the cart's lines that yields [`OrderLine`]s on demand.
///
/// Nothing is copied until iterated, and the view can be iterated any number of
/// times.
#[derive(Copy, Clone, Debug)]
pub struct OrderLines<'a> {
    items: &'a [LineItem],
}

impl<'a> OrderLines<'a> {
    pub(crate) fn new(items: &'a [LineItem]) -> Self {
        Self { items }
    }

    /// Iterate over the order lines from the start.
    pub fn iter(&self) -> Iter<'a> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// Number of order lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no order lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for OrderLines<'a> {
    type Item = OrderLine;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &OrderLines<'a> {
    type Item = OrderLine;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`OrderLines`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, LineItem>,
}

impl Iterator for Iter<'_> {
    type Item = OrderLine;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(OrderLine::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use rusty_money::iso::VND;

    use crate::{cart::Cart, testing::product_ref};

    use super::*;

    #[test]
    fn lines_follow_cart_order() {
        let mut cart = Cart::new(VND);
        cart.add_item(product_ref(5, 10_000));
        cart.add_item(product_ref(2, 20_000));
        cart.add_item(product_ref(5, 10_000));

        let lines: Vec<OrderLine> = cart.order_lines().iter().collect();

        assert_eq!(
            lines,
            vec![
                OrderLine {
                    product_id: ProductId::new(5),
                    quantity: 2,
                },
                OrderLine {
                    product_id: ProductId::new(2),
                    quantity: 1,
                },
            ]
        );
    }

    #[test]
    fn lines_can_be_iterated_again() {
        let mut cart = Cart::new(VND);
        cart.add_item(product_ref(1, 10_000));
        cart.add_item(product_ref(2, 10_000));

        let lines = cart.order_lines();

        let first: Vec<OrderLine> = lines.into_iter().collect();
        let second: Vec<OrderLine> = lines.into_iter().collect();

        assert_eq!(first, second);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.iter().len(), 2);
    }

    #[test]
    fn lines_serialize_without_prices() -> testresult::TestResult {
        let mut cart = Cart::new(VND);
        cart.add_item(product_ref(3, 10_000));

        let json = serde_json::to_string(&cart.order_lines().iter().collect::<Vec<_>>())?;

        assert_eq!(json, r#"[{"product_id":3,"quantity":1}]"#);

        Ok(())
    }
}
