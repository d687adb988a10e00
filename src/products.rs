//! Products

use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::pricing::Price;

/// Catalog identifier of a product.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wraps a raw catalog id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw catalog id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Cup size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    /// Small
    #[serde(rename = "S")]
    Small,

    /// Medium
    #[default]
    #[serde(rename = "M")]
    Medium,

    /// Large
    #[serde(rename = "L")]
    Large,
}

impl Size {
    /// Label shown on the product card.
    pub fn label(self) -> &'static str {
        match self {
            Size::Small => "Nhỏ",
            Size::Medium => "Vừa",
            Size::Large => "Lớn",
        }
    }
}

/// Merchandising status shown as a badge on the product card.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// No badge.
    #[default]
    #[serde(rename = "")]
    None,

    /// Best seller.
    Hot,

    /// Discounted.
    Sale,

    /// Temporarily unavailable.
    SoldOut,
}

impl ProductStatus {
    /// Label shown inside the status badge.
    pub fn label(self) -> &'static str {
        match self {
            ProductStatus::None => "Không hiển thị",
            ProductStatus::Hot => "Hot",
            ProductStatus::Sale => "Giảm giá",
            ProductStatus::SoldOut => "Hết hàng",
        }
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Catalog id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Long description
    pub description: String,

    /// Category name
    pub category: String,

    /// Current selling price
    pub price: Price,

    /// Price before discount, when on sale
    pub original_price: Option<Price>,

    /// Discount percentage (0-100)
    pub discount_percentage: u8,

    /// Cup size
    pub size: Size,

    /// Merchandising status
    pub status: ProductStatus,

    /// Image URL
    pub image_url: String,

    /// Whether the product can currently be ordered
    pub is_available: bool,

    /// Whether the product is highlighted on the home page
    pub is_featured: bool,
}

impl Product {
    /// Amount saved against the original price, if the product is discounted.
    pub fn discount_amount(&self) -> Option<Price> {
        let original = self.original_price?;

        if self.discount_percentage == 0 || original.currency() != self.price.currency() {
            return None;
        }

        let saved = original
            .to_minor_units()
            .saturating_sub(self.price.to_minor_units());

        (saved > 0).then(|| Price::from_minor(saved, self.price.currency()))
    }

    /// Discount label such as `-20%`, only for products on sale.
    pub fn discount_label(&self) -> Option<String> {
        (self.status == ProductStatus::Sale && self.discount_percentage > 0)
            .then(|| format!("-{}%", self.discount_percentage))
    }
}

/// The fields of a product captured when it is added to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRef {
    /// Catalog id
    pub product_id: ProductId,

    /// Product name at add-time
    pub name: String,

    /// Unit price at add-time
    pub unit_price: Price,

    /// Image URL at add-time
    pub image_url: String,
}

impl From<&Product> for ProductRef {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}
