//! Product comparison state store.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::observe::{Subscribers, SubscriptionId};
use crate::persist;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uzagro_storage::Storage;

/// Storage key holding the persisted comparison payload.
pub const COMPARE_STORAGE_KEY: &str = "uzagro-compare-storage";

/// Maximum number of products compared side by side.
pub const MAX_COMPARE_ITEMS: usize = 4;

/// Outcome of [`CompareStore::add_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareAdd {
    /// The product was appended to the comparison.
    Added,
    /// A product with the same id is already being compared; state unchanged.
    AlreadyPresent,
    /// The comparison already holds [`MAX_COMPARE_ITEMS`] products; state
    /// unchanged.
    CapacityFull,
}

impl CompareAdd {
    /// Whether the add changed the collection.
    pub fn is_added(&self) -> bool {
        matches!(self, CompareAdd::Added)
    }
}

/// Outcome of [`CompareStore::toggle_compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareToggle {
    /// The product was not being compared and has been added.
    Added,
    /// The product was being compared and has been removed.
    Removed,
    /// The product could not be added (comparison at capacity).
    Rejected,
}

/// Persisted comparison payload.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct CompareSnapshot {
    #[serde(default)]
    items: Vec<Product>,
}

/// A capacity-bounded set of products for side-by-side comparison.
///
/// Holds up to [`MAX_COMPARE_ITEMS`] distinct products (by id) in insertion
/// order. The panel flag opens on a successful add and closes when the
/// collection empties.
#[derive(Debug)]
pub struct CompareStore {
    items: Vec<Product>,
    is_open: bool,
    storage: Option<Storage>,
    subscribers: Subscribers,
}

impl CompareStore {
    /// Create an empty comparison with no persistence.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            is_open: false,
            storage: None,
            subscribers: Subscribers::default(),
        }
    }

    /// Create a comparison attached to `storage`, rehydrating any persisted
    /// items. An absent, unreadable, or version-mismatched blob yields an
    /// empty comparison; the panel always starts closed.
    pub fn with_storage(storage: Storage) -> Self {
        let mut items = persist::load::<CompareSnapshot>(&storage, COMPARE_STORAGE_KEY)
            .map(|snapshot| snapshot.items)
            .unwrap_or_default();

        // Restore the invariants a tampered blob could break: ids stay
        // unique (first occurrence wins) and the capacity bound holds.
        let mut seen = HashSet::new();
        items.retain(|item| seen.insert(item.id));
        items.truncate(MAX_COMPARE_ITEMS);

        Self {
            items,
            is_open: false,
            storage: Some(storage),
            subscribers: Subscribers::default(),
        }
    }

    /// Add a product to the comparison.
    ///
    /// Duplicate ids and adds beyond capacity leave the state untouched; the
    /// returned outcome tells the caller which case applied so the UI can
    /// surface it.
    pub fn add_item(&mut self, product: Product) -> CompareAdd {
        if self.is_in_compare(product.id) {
            return CompareAdd::AlreadyPresent;
        }
        if self.items.len() >= MAX_COMPARE_ITEMS {
            return CompareAdd::CapacityFull;
        }

        self.items.push(product);
        self.is_open = true;
        self.persist_and_notify();
        CompareAdd::Added
    }

    /// Remove the product with the given id. Unknown ids are a no-op. The
    /// panel closes when the collection empties.
    pub fn remove_item(&mut self, product_id: ProductId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != product_id);
        if self.items.len() == before {
            return;
        }

        if self.items.is_empty() {
            self.is_open = false;
        }
        self.persist_and_notify();
    }

    /// Empty the comparison and close the panel.
    pub fn clear(&mut self) {
        self.items.clear();
        self.is_open = false;
        self.persist_and_notify();
    }

    /// Set the panel visibility to `explicit`, or flip it when `None`.
    pub fn toggle_open(&mut self, explicit: Option<bool>) {
        self.is_open = explicit.unwrap_or(!self.is_open);
        self.subscribers.notify();
    }

    /// Check whether a product is currently being compared.
    pub fn is_in_compare(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == product_id)
    }

    /// Remove the product if present, otherwise add it.
    pub fn toggle_compare(&mut self, product: Product) -> CompareToggle {
        if self.is_in_compare(product.id) {
            self.remove_item(product.id);
            CompareToggle::Removed
        } else {
            match self.add_item(product) {
                CompareAdd::Added => CompareToggle::Added,
                CompareAdd::AlreadyPresent | CompareAdd::CapacityFull => CompareToggle::Rejected,
            }
        }
    }

    /// The compared products, in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Whether the compare bar is revealed.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Number of compared products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the comparison is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register a callback invoked after every successful mutation.
    pub fn subscribe(&mut self, callback: impl Fn() + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a subscription. Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn persist_and_notify(&self) {
        if let Some(storage) = &self.storage {
            persist::save(
                storage,
                COMPARE_STORAGE_KEY,
                CompareSnapshot {
                    items: self.items.clone(),
                },
            );
        }
        self.subscribers.notify();
    }
}

impl Default for CompareStore {
    fn default() -> Self {
        Self::new()
    }
}
