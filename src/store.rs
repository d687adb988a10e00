//! Cart Store
//!
//! [`CartStore`] owns a [`Cart`] and mirrors it to a [`Storage`] slot after every
//! mutation. Nothing here fails: unknown products are ignored, unreadable saved
//! carts start empty, and a storage failure switches the store to memory-only mode
//! for the rest of the session, reported once to observers.

use std::fmt;

use rusty_money::iso::{Currency, VND};
use tracing::{debug, warn};

use crate::{
    cart::{Cart, CartEvent, OrderLines, QuantityChange, codec},
    catalog::ProductLookup,
    items::LineItem,
    observer::{CartChange, CartObserver, PersistenceOperation, PersistenceWarning},
    pricing::Price,
    products::{ProductId, ProductRef},
    storage::Storage,
};

/// Slot key the storefront has always saved the cart under.
pub const DEFAULT_STORAGE_KEY: &str = "cart";

/// Store settings.
#[derive(Debug, Clone)]
pub struct CartOptions {
    /// Storage slot key
    pub key: String,

    /// Currency the cart is priced in
    pub currency: &'static Currency,
}

impl Default for CartOptions {
    fn default() -> Self {
        Self {
            key: DEFAULT_STORAGE_KEY.to_string(),
            currency: VND,
        }
    }
}

/// The cart, its storage slot and its observers.
pub struct CartStore<S: Storage> {
    cart: Cart,
    storage: S,
    key: String,
    degraded: bool,
    warning: Option<PersistenceWarning>,
    warning_delivered: bool,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: Storage> CartStore<S> {
    /// Load the cart saved in `storage`, or start empty.
    ///
    /// A missing, blank or malformed slot gives an empty cart. If the slot cannot be
    /// read at all the store runs in memory only.
    #[tracing::instrument(level = "debug", skip_all, fields(key = %options.key))]
    pub fn initialize(storage: S, options: CartOptions) -> Self {
        let mut store = Self {
            cart: Cart::new(options.currency),
            storage,
            key: options.key,
            degraded: false,
            warning: None,
            warning_delivered: false,
            observers: Vec::new(),
        };

        match store.storage.get(&store.key) {
            Ok(Some(contents)) if !contents.trim().is_empty() => {
                match codec::decode(&contents, options.currency) {
                    Ok(cart) => {
                        debug!(lines = cart.len(), "restored saved cart");
                        store.cart = cart;
                    }
                    Err(err) => debug!(error = %err, "discarding malformed saved cart"),
                }
            }
            Ok(_) => debug!("no saved cart"),
            Err(err) => store.degrade(PersistenceOperation::Load, err.to_string()),
        }

        store
    }

    /// Register an observer for cart changes and persistence warnings.
    ///
    /// If persistence already failed before anyone was listening, the first
    /// observer receives that warning straight away.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        let mut observer: Box<dyn CartObserver> = Box::new(observer);

        if !self.warning_delivered
            && let Some(warning) = &self.warning
        {
            observer.on_warning(warning);
            self.warning_delivered = true;
        }

        self.observers.push(observer);
    }

    /// Add one unit of `product`.
    ///
    /// Returns whether the cart changed; a product priced in another currency is
    /// ignored.
    pub fn add_item(&mut self, product: ProductRef) -> bool {
        let product_id = product.product_id;
        let event = self.cart.add_item(product);

        if event.is_none() {
            debug!(%product_id, "ignoring product priced in another currency");
        }

        self.commit(event)
    }

    /// Look up `product_id` and add one unit of it.
    ///
    /// Returns whether the cart changed; an unknown product is ignored.
    pub fn add_product(&mut self, catalog: &impl ProductLookup, product_id: ProductId) -> bool {
        let Some(product) = catalog.product(product_id) else {
            debug!(%product_id, "ignoring unknown product");
            return false;
        };

        self.add_item(ProductRef::from(product))
    }

    /// Change the quantity of a line by one unit.
    ///
    /// Returns whether the cart changed. Unknown products and decreasing a single
    /// unit leave the cart as it is.
    pub fn change_quantity(&mut self, product_id: ProductId, change: QuantityChange) -> bool {
        let event = self.cart.change_quantity(product_id, change);

        self.commit(event)
    }

    /// Remove the line for `product_id`. Returns whether the cart changed.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let event = self.cart.remove_item(product_id);

        self.commit(event)
    }

    /// Remove every line. Returns whether the cart changed.
    pub fn clear(&mut self) -> bool {
        let event = self.cart.clear();

        self.commit(event)
    }

    /// Sum of the quantities of all lines.
    pub fn total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    /// Sum of the line totals.
    pub fn total_amount(&self) -> Price {
        self.cart.total_amount()
    }

    /// Product ids and quantities for an order submission, in cart order.
    pub fn snapshot_for_order(&self) -> OrderLines<'_> {
        self.cart.order_lines()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Get the line for `product_id`.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.cart.get(product_id)
    }

    /// Check whether the cart has a line for `product_id`.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.cart.contains(product_id)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// The cart itself.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Currency the cart is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.cart.currency()
    }

    /// Storage slot key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the store has stopped persisting.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// The warning raised when persistence stopped, if it has.
    pub fn persistence_warning(&self) -> Option<&PersistenceWarning> {
        self.warning.as_ref()
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Drop the store and return its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn commit(&mut self, event: Option<CartEvent>) -> bool {
        let Some(event) = event else {
            return false;
        };

        self.persist();

        let change = CartChange {
            event,
            total_item_count: self.cart.total_item_count(),
            total_amount: self.cart.total_amount(),
        };

        debug!(
            ?event,
            total_item_count = change.total_item_count,
            total_amount = %change.total_amount,
            "cart changed"
        );

        for observer in &mut self.observers {
            observer.on_change(&change);
        }

        true
    }

    fn persist(&mut self) {
        if self.degraded {
            return;
        }

        let result = match codec::encode(&self.cart) {
            Ok(contents) => self
                .storage
                .set(&self.key, &contents)
                .map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };

        if let Err(message) = result {
            self.degrade(PersistenceOperation::Save, message);
        }
    }

    fn degrade(&mut self, operation: PersistenceOperation, message: String) {
        if self.degraded {
            return;
        }

        self.degraded = true;

        let warning = PersistenceWarning {
            operation,
            key: self.key.clone(),
            message,
        };

        warn!(
            key = %warning.key,
            ?operation,
            error = %warning.message,
            "cart persistence disabled for this session"
        );

        if !self.observers.is_empty() {
            for observer in &mut self.observers {
                observer.on_warning(&warning);
            }

            self.warning_delivered = true;
        }

        self.warning = Some(warning);
    }
}

impl<S: Storage + fmt::Debug> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("storage", &self.storage)
            .field("key", &self.key)
            .field("degraded", &self.degraded)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
