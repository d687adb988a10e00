//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    pricing::PriceParseError,
    products::{Product, ProductId},
};

pub mod fixtures;

/// Errors building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a fixture file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A price could not be parsed (fixture key, error)
    #[error("invalid price for {0}: {1}")]
    Price(String, PriceParseError),

    /// Two products share an id
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),

    /// Products are priced in different currencies
    #[error("currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(&'static str, &'static str),
}

/// Resolves product ids to catalog entries.
pub trait ProductLookup {
    /// The product with `id`, if it exists.
    fn product(&self, id: ProductId) -> Option<&Product>;
}

/// Products in display order, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from `products`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if two products share an id or the products are
    /// priced in different currencies.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();

        for product in products {
            catalog.insert(product)?;
        }

        Ok(catalog)
    }

    /// Append a product.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the id is already taken or the product is priced
    /// in a different currency from the rest of the catalog.
    pub fn insert(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.index.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }

        if let Some(first) = self.products.first() {
            let expected = first.price.currency();
            let found = product.price.currency();

            if expected != found {
                return Err(CatalogError::CurrencyMismatch(
                    expected.iso_alpha_code,
                    found.iso_alpha_code,
                ));
            }
        }

        self.index.insert(product.id, self.products.len());
        self.products.push(product);

        Ok(())
    }

    /// Iterate over the products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Featured products, in display order.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.is_featured)
    }

    /// Currency the catalog is priced in, if it has any products.
    pub fn currency(&self) -> Option<&'static Currency> {
        self.products.first().map(|product| product.price.currency())
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductLookup for Catalog {
    fn product(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|&position| self.products.get(position))
    }
}
