//! Shared helpers for unit tests.

use rusty_money::iso::VND;

use crate::{
    pricing::Price,
    products::{Product, ProductId, ProductRef, ProductStatus, Size},
};

/// A product reference priced in VND.
pub(crate) fn product_ref(id: u64, price: i64) -> ProductRef {
    ProductRef {
        product_id: ProductId::new(id),
        name: format!("Product {id}"),
        unit_price: Price::from_minor(price, VND),
        image_url: format!("/media/products/{id}.jpg"),
    }
}

/// A catalog product priced in VND.
pub(crate) fn product(id: u64, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        description: String::new(),
        category: "Trà sữa".to_string(),
        price: Price::from_minor(price, VND),
        original_price: None,
        discount_percentage: 0,
        size: Size::Medium,
        status: ProductStatus::None,
        image_url: format!("/media/products/{id}.jpg"),
        is_available: true,
        is_featured: false,
    }
}
