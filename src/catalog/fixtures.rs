//! Catalog Fixtures
//!
//! Products are read from YAML:
//!
//! ```yaml
//! products:
//!   tra-sua-tran-chau:
//!     id: 1
//!     name: Trà sữa trân châu
//!     category: Trà sữa
//!     price: 25000 VND
//!     size: M
//!     status: hot
//! ```

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    catalog::{Catalog, CatalogError},
    pricing::parse_price,
    products::{Product, ProductId, ProductStatus, Size},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Map of fixture key -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Catalog id
    pub id: u64,

    /// Product name
    pub name: String,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// Category name
    #[serde(default)]
    pub category: String,

    /// Price (e.g. "25000 VND")
    pub price: String,

    /// Price before discount (e.g. "30000 VND")
    #[serde(default)]
    pub original_price: Option<String>,

    /// Discount percentage
    #[serde(default)]
    pub discount_percentage: u8,

    /// Cup size (S, M or L)
    #[serde(default)]
    pub size: Size,

    /// Merchandising status (hot, sale, sold_out)
    #[serde(default)]
    pub status: ProductStatus,

    /// Image URL
    #[serde(default)]
    pub image: String,

    /// Whether the product can be ordered
    #[serde(default = "available_by_default")]
    pub is_available: bool,

    /// Whether the product is featured
    #[serde(default)]
    pub is_featured: bool,
}

fn available_by_default() -> bool {
    true
}

impl ProductFixture {
    fn into_product(self, key: &str) -> Result<Product, CatalogError> {
        let price = parse_price(&self.price).map_err(|err| CatalogError::Price(key.to_string(), err))?;

        let original_price = self
            .original_price
            .as_deref()
            .map(parse_price)
            .transpose()
            .map_err(|err| CatalogError::Price(key.to_string(), err))?;

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            category: self.category,
            price,
            original_price,
            discount_percentage: self.discount_percentage.min(100),
            size: self.size,
            status: self.status,
            image_url: self.image,
            is_available: self.is_available,
            is_featured: self.is_featured,
        })
    }
}

/// Build a catalog from YAML, ordering products by id.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the YAML cannot be parsed, a price is invalid, two
/// products share an id or products are priced in different currencies.
pub fn catalog_from_yaml(contents: &str) -> Result<Catalog, CatalogError> {
    let fixture: CatalogFixture = serde_norway::from_str(contents)?;

    let mut products = fixture
        .products
        .into_iter()
        .map(|(key, product)| product.into_product(&key))
        .collect::<Result<Vec<_>, _>>()?;

    products.sort_by_key(|product| product.id);

    Catalog::with_products(products)
}

/// Load a catalog from a YAML file.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the file cannot be read or its contents are not a
/// valid catalog.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let contents = fs::read_to_string(path)?;

    catalog_from_yaml(&contents)
}
