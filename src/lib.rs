//! Storefront Cart
//!
//! The shopping cart behind a drinks storefront: line items keyed by product, a
//! store that mirrors every change to a persistent slot and tells observers about
//! it, and the order snapshot handed to checkout.
//!
//! ```
//! use storefront_cart::prelude::*;
//! use rusty_money::iso::VND;
//!
//! let mut store = CartStore::initialize(MemoryStorage::new(), CartOptions::default());
//!
//! store.add_item(ProductRef {
//!     product_id: ProductId::new(1),
//!     name: "Trà sữa trân châu".to_string(),
//!     unit_price: Price::from_minor(25_000, VND),
//!     image_url: String::new(),
//! });
//!
//! assert_eq!(store.total_item_count(), 1);
//! assert_eq!(store.total_amount(), Price::from_minor(25_000, VND));
//! ```

pub mod badges;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod items;
pub mod observability;
pub mod observer;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod storage;
pub mod store;

#[cfg(test)]
mod testing;
