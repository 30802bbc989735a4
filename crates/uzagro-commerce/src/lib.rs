//! Client-side commerce state for the UzAgro storefront.
//!
//! This crate provides the domain types and state stores the storefront
//! views render from:
//!
//! - **Catalog**: product, category, brand and pricing snapshots as returned
//!   by the catalog API
//! - **Cart**: line-item collection with quantity merging and a
//!   visible-price-only subtotal
//! - **Compare**: capacity-bounded product set for side-by-side comparison
//! - **Observe**: mutation notifications so views re-render on change
//!
//! Both stores persist best-effort through an injected
//! [`uzagro_storage::Storage`] handle and rehydrate from it at construction.
//!
//! # Example
//!
//! ```rust,ignore
//! use uzagro_commerce::prelude::*;
//! use uzagro_storage::Storage;
//!
//! let storage = Storage::open_dir(state_dir)?;
//! let mut cart = CartStore::with_storage(storage);
//!
//! // `product` was fetched from the catalog API by the caller
//! cart.add_item(product, 1);
//! println!("Subtotal: {}", cart.total());
//! ```

pub mod cart;
pub mod catalog;
pub mod compare;
pub mod ids;
pub mod money;
pub mod observe;
mod persist;

pub use cart::{CartItem, CartStore, CART_STORAGE_KEY};
pub use compare::{
    CompareAdd, CompareStore, CompareToggle, COMPARE_STORAGE_KEY, MAX_COMPARE_ITEMS,
};
pub use ids::*;
pub use money::{Currency, Money};
pub use observe::SubscriptionId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Brand, Category, Product, ProductPricing, ProductType, SpecValue, StockStatus,
    };

    // Stores
    pub use crate::cart::{CartItem, CartStore, CART_STORAGE_KEY};
    pub use crate::compare::{
        CompareAdd, CompareStore, CompareToggle, COMPARE_STORAGE_KEY, MAX_COMPARE_ITEMS,
    };
    pub use crate::observe::SubscriptionId;
}
