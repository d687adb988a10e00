//! Cart Observer

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{cart::CartEvent, pricing::Price};

/// State of the cart right after a mutation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CartChange {
    /// What changed
    pub event: CartEvent,

    /// Sum of quantities after the change
    pub total_item_count: u64,

    /// Sum of line totals after the change
    pub total_amount: Price,
}

/// Which storage access failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PersistenceOperation {
    /// Reading the saved cart at start-up
    Load,

    /// Writing the cart after a mutation
    Save,
}

/// Raised once when the cart stops being persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistenceWarning {
    /// The failed operation
    pub operation: PersistenceOperation,

    /// Storage slot key
    pub key: String,

    /// Description of the storage error
    pub message: String,
}

impl fmt::Display for PersistenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.operation {
            PersistenceOperation::Load => "load",
            PersistenceOperation::Save => "save",
        };

        write!(
            f,
            "could not {action} cart slot {:?} ({}); changes are kept for this session only",
            self.key, self.message
        )
    }
}

/// Receives cart change notifications.
///
/// Observers are called synchronously after each mutation that changed the cart,
/// once the new state has been persisted (or persistence has been given up on).
pub trait CartObserver {
    /// Called after the cart changed.
    fn on_change(&mut self, change: &CartChange);

    /// Called at most once per store when persistence fails and the cart falls back
    /// to memory only.
    fn on_warning(&mut self, _warning: &PersistenceWarning) {}
}

/// Observer that ignores every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {
    fn on_change(&mut self, _change: &CartChange) {}
}

/// Observer calling a closure on every change. Created with [`from_fn`].
pub struct FnObserver<F>(F);

impl<F> fmt::Debug for FnObserver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnObserver").finish_non_exhaustive()
    }
}

impl<F: FnMut(&CartChange)> CartObserver for FnObserver<F> {
    fn on_change(&mut self, change: &CartChange) {
        (self.0)(change);
    }
}

/// Wrap a closure as a [`CartObserver`] that only listens for changes.
pub fn from_fn<F: FnMut(&CartChange)>(f: F) -> FnObserver<F> {
    FnObserver(f)
}

/// Shared observers, so the view layer can keep a handle to state it also hands to
/// the store.
impl<O: CartObserver + ?Sized> CartObserver for Rc<RefCell<O>> {
    fn on_change(&mut self, change: &CartChange) {
        self.borrow_mut().on_change(change);
    }

    fn on_warning(&mut self, warning: &PersistenceWarning) {
        self.borrow_mut().on_warning(warning);
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::VND;

    use crate::products::ProductId;

    use super::*;

    fn change() -> CartChange {
        CartChange {
            event: CartEvent::ItemAdded {
                product_id: ProductId::new(1),
                quantity: 1,
            },
            total_item_count: 1,
            total_amount: Price::from_minor(25_000, VND),
        }
    }

    #[derive(Default)]
    struct Recorder {
        counts: Vec<u64>,
        warnings: usize,
    }

    impl CartObserver for Recorder {
        fn on_change(&mut self, change: &CartChange) {
            self.counts.push(change.total_item_count);
        }

        fn on_warning(&mut self, _warning: &PersistenceWarning) {
            self.warnings += 1;
        }
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();

        {
            let mut observer = from_fn(|change: &CartChange| seen.push(change.total_item_count));
            observer.on_change(&change());
        }

        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn shared_observer_forwards_both_callbacks() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut handle = Rc::clone(&recorder);

        handle.on_change(&change());
        handle.on_warning(&PersistenceWarning {
            operation: PersistenceOperation::Save,
            key: "cart".to_string(),
            message: "storage is unavailable".to_string(),
        });

        assert_eq!(recorder.borrow().counts, vec![1]);
        assert_eq!(recorder.borrow().warnings, 1);
    }

    #[test]
    fn warning_display_names_operation_and_key() {
        let warning = PersistenceWarning {
            operation: PersistenceOperation::Load,
            key: "cart".to_string(),
            message: "storage is unavailable".to_string(),
        };

        assert_eq!(
            warning.to_string(),
            "could not load cart slot \"cart\" (storage is unavailable); changes are kept for this session only"
        );
    }
}
