//! Storefront cart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    badges::{Badge, CartBadge, order_status_badge, selection_badge, status_badge},
    cart::{Cart, CartError, CartEvent, OrderLine, OrderLines, QuantityChange},
    catalog::{Catalog, CatalogError, ProductLookup, fixtures::load_catalog},
    items::LineItem,
    observer::{
        CartChange, CartObserver, NoopObserver, PersistenceOperation, PersistenceWarning, from_fn,
    },
    orders::{
        CustomerDetails, OrderError, OrderRequest, OrderStatus, PaymentMethod,
        checkout::{
            CheckoutError, OrderConfirmation, OrderSubmitter, SubmissionError, checkout,
        },
    },
    pricing::Price,
    products::{Product, ProductId, ProductRef, ProductStatus, Size},
    receipt::{Receipt, ReceiptError},
    storage::{FileStorage, MemoryStorage, Storage, StorageError},
    store::{CartOptions, CartStore, DEFAULT_STORAGE_KEY},
};
