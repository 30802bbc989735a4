//! Product snapshot types.

use crate::catalog::{Brand, Category, ProductPricing};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stock availability shown on listings and product cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Available from a local warehouse.
    #[default]
    InStock,
    /// Last units available.
    LowStock,
    /// Made or imported to order.
    PreOrder,
    /// Currently unavailable.
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::PreOrder => "pre_order",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in_stock" => Some(StockStatus::InStock),
            "low_stock" => Some(StockStatus::LowStock),
            "pre_order" => Some(StockStatus::PreOrder),
            "out_of_stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }

    /// Whether the product can currently be ordered.
    pub fn is_orderable(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

/// Product type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    /// Self-propelled machinery (tractors, combines).
    #[default]
    Machinery,
    /// Mounted or trailed attachments.
    Attachment,
    /// Spare part.
    SparePart,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Machinery => "machinery",
            ProductType::Attachment => "attachment",
            ProductType::SparePart => "spare_part",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "machinery" => Some(ProductType::Machinery),
            "attachment" => Some(ProductType::Attachment),
            "spare_part" => Some(ProductType::SparePart),
            _ => None,
        }
    }
}

/// A single specification entry (value plus optional unit).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecValue {
    /// The specification value (e.g., "240").
    pub value: String,
    /// Unit of measure (e.g., "hp").
    pub unit: Option<String>,
}

impl SpecValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: None,
        }
    }

    pub fn with_unit(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: Some(unit.into()),
        }
    }
}

/// A product snapshot as returned by the catalog API.
///
/// The state stores keep full copies; mutating a catalog record after it was
/// added to a cart or comparison does not affect the stored copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Stock keeping unit (unique).
    pub sku: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Product name.
    pub name: String,
    /// Type of product.
    pub product_type: ProductType,
    /// Short description for listings.
    pub short_description: Option<String>,
    /// URL of the main image.
    pub main_image: Option<String>,
    /// Category this product belongs to.
    pub category: Category,
    /// Brand of the product.
    pub brand: Brand,
    /// Price block with visibility rules.
    pub pricing: ProductPricing,
    /// Stock availability.
    pub stock_status: StockStatus,
    /// Whether the product is featured on the landing page.
    pub is_featured: bool,
    /// Specification map (label -> value with unit), when provided.
    pub specifications: Option<BTreeMap<String, SpecValue>>,
}

impl Product {
    /// Create a new product snapshot with neutral defaults.
    pub fn new(
        id: ProductId,
        sku: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id,
            sku: sku.into(),
            slug: slug.into(),
            name: name.into(),
            product_type: ProductType::Machinery,
            short_description: None,
            main_image: None,
            category: Category::default(),
            brand: Brand::default(),
            pricing: ProductPricing::hidden(),
            stock_status: StockStatus::InStock,
            is_featured: false,
            specifications: None,
        }
    }

    /// Check if the product can currently be ordered.
    pub fn is_orderable(&self) -> bool {
        self.stock_status.is_orderable()
    }

    /// Look up a specification entry by label.
    pub fn spec(&self, key: &str) -> Option<&SpecValue> {
        self.specifications.as_ref().and_then(|specs| specs.get(key))
    }
}
