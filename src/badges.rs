//! Badges
//!
//! View-models for the badges the storefront toggles as the cart changes. They
//! carry text and CSS classes only; painting them is up to the view layer.

use crate::{
    observer::{CartChange, CartObserver},
    orders::OrderStatus,
    products::{Product, ProductStatus},
};

/// Navbar badge showing how many units are in the cart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CartBadge {
    count: u64,
}

impl CartBadge {
    /// Badge for a cart holding `count` units.
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    /// Units in the cart.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Text shown in the badge.
    pub fn text(&self) -> String {
        self.count.to_string()
    }

    /// Whether the cart has anything in it.
    pub fn has_items(&self) -> bool {
        self.count > 0
    }

    /// CSS class that animates a non-empty badge.
    pub fn class(&self) -> Option<&'static str> {
        self.has_items().then_some("has-items")
    }
}

impl CartObserver for CartBadge {
    fn on_change(&mut self, change: &CartChange) {
        self.count = change.total_item_count;
    }
}

/// Text and classes for a badge element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    /// Text inside the badge
    pub text: String,

    /// Space-separated CSS classes
    pub class: &'static str,
}

/// Badge on a product card: "Đã chọn" while the product is in the cart, the cup
/// size otherwise.
pub fn selection_badge(product: &Product, in_cart: bool) -> Badge {
    if in_cart {
        Badge {
            text: "Đã chọn".to_string(),
            class: "size-badge selected-badge",
        }
    } else {
        Badge {
            text: product.size.label().to_string(),
            class: "size-badge",
        }
    }
}

/// Merchandising badge on a product card, if the product has a status.
///
/// A sale with a discount shows the percentage instead of the status label.
pub fn status_badge(product: &Product) -> Option<Badge> {
    let class = match product.status {
        ProductStatus::None => return None,
        ProductStatus::Hot => "bg-danger",
        ProductStatus::Sale => "bg-success",
        ProductStatus::SoldOut => "bg-secondary",
    };

    let text = product
        .discount_label()
        .unwrap_or_else(|| product.status.label().to_string());

    Some(Badge { text, class })
}

/// Badge showing an order's status in the order list.
pub fn order_status_badge(status: OrderStatus) -> Badge {
    let class = match status {
        OrderStatus::Pending => "status-badge status-pending",
        OrderStatus::Confirmed => "status-badge status-confirmed",
        OrderStatus::Preparing => "status-badge status-preparing",
        OrderStatus::Ready => "status-badge status-ready",
        OrderStatus::Delivered => "status-badge status-delivered",
        OrderStatus::Cancelled => "status-badge status-cancelled",
    };

    Badge {
        text: status.label().to_string(),
        class,
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crate::{
        products::Size,
        storage::MemoryStorage,
        store::{CartOptions, CartStore},
        testing::{product, product_ref},
    };

    use super::*;

    #[test]
    fn cart_badge_tracks_store_changes() {
        let badge = Rc::new(RefCell::new(CartBadge::default()));
        let mut store = CartStore::initialize(MemoryStorage::new(), CartOptions::default());
        store.subscribe(Rc::clone(&badge));

        assert_eq!(badge.borrow().class(), None);

        store.add_item(product_ref(1, 25_000));
        store.add_item(product_ref(1, 25_000));

        assert_eq!(badge.borrow().text(), "2");
        assert_eq!(badge.borrow().class(), Some("has-items"));

        store.clear();

        assert!(!badge.borrow().has_items());
    }

    #[test]
    fn selection_badge_toggles_with_cart_membership() {
        let mut tea = product(1, 25_000);
        tea.size = Size::Large;

        assert_eq!(
            selection_badge(&tea, true),
            Badge {
                text: "Đã chọn".to_string(),
                class: "size-badge selected-badge",
            }
        );
        assert_eq!(
            selection_badge(&tea, false),
            Badge {
                text: "Lớn".to_string(),
                class: "size-badge",
            }
        );
    }

    #[test]
    fn status_badge_classes() {
        let mut tea = product(1, 25_000);
        assert_eq!(status_badge(&tea), None);

        tea.status = ProductStatus::Hot;
        assert_eq!(
            status_badge(&tea).map(|badge| badge.class),
            Some("bg-danger")
        );

        tea.status = ProductStatus::SoldOut;
        assert_eq!(
            status_badge(&tea).map(|badge| badge.text),
            Some("Hết hàng".to_string())
        );
    }

    #[test]
    fn sale_badge_shows_discount() {
        let mut tea = product(1, 25_000);
        tea.status = ProductStatus::Sale;

        assert_eq!(
            status_badge(&tea).map(|badge| badge.text),
            Some("Giảm giá".to_string())
        );

        tea.discount_percentage = 15;

        assert_eq!(
            status_badge(&tea),
            Some(Badge {
                text: "-15%".to_string(),
                class: "bg-success",
            })
        );
    }

    #[test]
    fn order_status_badge_uses_status_code() {
        let badge = order_status_badge(OrderStatus::Preparing);

        assert_eq!(badge.text, "Đang chuẩn bị");
        assert_eq!(badge.class, "status-badge status-preparing");
    }
}
