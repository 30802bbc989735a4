//! Shopping cart state store.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::observe::{Subscribers, SubscriptionId};
use crate::persist;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uzagro_storage::Storage;

/// Storage key holding the persisted cart payload.
pub const CART_STORAGE_KEY: &str = "uzagro-cart-storage";

/// A line item in the cart: a product snapshot plus a quantity.
///
/// Serializes with the product fields inlined, matching the persisted
/// document shape of the storefront (`{ ...product, "quantity": n }`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product snapshot, copied at add time.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity, at least 1 while the item is present.
    pub quantity: i64,
}

impl CartItem {
    /// Create a new line item.
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    /// Line contribution to the subtotal under the visible-price-only
    /// policy: a hidden or missing USD price contributes zero.
    pub fn line_total(&self) -> Money {
        match self.product.pricing.visible_usd() {
            Some(unit) => unit.multiply(self.quantity),
            None => Money::zero(Currency::USD),
        }
    }
}

/// Persisted cart payload.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct CartSnapshot {
    #[serde(default)]
    items: Vec<CartItem>,
}

/// The shopping cart line-item collection.
///
/// Items merge by product id on add and keep insertion order. All mutations
/// succeed; invalid input (non-positive quantity, unknown id) is clamped or
/// ignored. When built with [`CartStore::with_storage`], every mutation is
/// written through best-effort to the injected storage handle.
#[derive(Debug)]
pub struct CartStore {
    items: Vec<CartItem>,
    is_open: bool,
    storage: Option<Storage>,
    subscribers: Subscribers,
}

impl CartStore {
    /// Create an empty cart with no persistence.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            is_open: false,
            storage: None,
            subscribers: Subscribers::default(),
        }
    }

    /// Create a cart attached to `storage`, rehydrating any persisted items.
    ///
    /// An absent, unreadable, or version-mismatched blob yields an empty
    /// cart. The UI-visibility flag is session-transient and always starts
    /// closed.
    pub fn with_storage(storage: Storage) -> Self {
        let mut items = persist::load::<CartSnapshot>(&storage, CART_STORAGE_KEY)
            .map(|snapshot| snapshot.items)
            .unwrap_or_default();

        // Restore the invariants a tampered blob could break: quantities
        // stay positive and ids stay unique (first occurrence wins).
        let mut seen = HashSet::new();
        items.retain(|item| item.quantity >= 1 && seen.insert(item.product.id));

        Self {
            items,
            is_open: false,
            storage: Some(storage),
            subscribers: Subscribers::default(),
        }
    }

    /// Add a product, merging by id.
    ///
    /// If an item with the same product id already exists its quantity is
    /// incremented, otherwise the product is appended as a new line item.
    /// Non-positive quantities are clamped to 1. The cart panel is revealed.
    pub fn add_item(&mut self, product: Product, quantity: i64) {
        let quantity = quantity.max(1);

        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem::new(product, quantity));
        }

        self.is_open = true;
        self.persist_and_notify();
    }

    /// Remove the item with the given product id. Unknown ids are a no-op.
    pub fn remove_item(&mut self, product_id: ProductId) {
        let before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        if self.items.len() < before {
            self.persist_and_notify();
        }
    }

    /// Set an item's quantity. A quantity of zero or less removes the item;
    /// unknown ids are a no-op. Item order is unchanged.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
            self.persist_and_notify();
        }
    }

    /// Empty the cart. The panel visibility is left unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist_and_notify();
    }

    /// Set the panel visibility to `explicit`, or flip it when `None`.
    pub fn toggle_open(&mut self, explicit: Option<bool>) {
        self.is_open = explicit.unwrap_or(!self.is_open);
        self.subscribers.notify();
    }

    /// Subtotal in USD under the visible-price-only policy: items whose
    /// price is hidden or unset contribute zero.
    pub fn total(&self) -> Money {
        let line_totals: Vec<Money> = self.items.iter().map(CartItem::line_total).collect();
        Money::sum(line_totals.iter(), Currency::USD)
    }

    /// The current line items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart panel is revealed.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Get an item by product id.
    pub fn get_item(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
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
                CART_STORAGE_KEY,
                CartSnapshot {
                    items: self.items.clone(),
                },
            );
        }
        self.subscribers.notify();
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
