//! Category and brand types for product organization.

use crate::ids::{BrandId, CategoryId};
use serde::{Deserialize, Serialize};

/// A product category in the catalog hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// URL-friendly slug.
    pub slug: String,
    /// Category name.
    pub name: String,
    /// Parent category ID (None for root categories).
    pub parent_id: Option<CategoryId>,
}

impl Category {
    /// Create a new root category.
    pub fn new(id: CategoryId, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            parent_id: None,
        }
    }

    /// Check if this is a root category.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A machinery manufacturer or distributor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Brand {
    /// Unique brand identifier.
    pub id: BrandId,
    /// URL-friendly slug.
    pub slug: String,
    /// Brand name.
    pub name: String,
    /// Country of origin.
    pub country: String,
    /// Whether the brand passed marketplace verification.
    pub is_verified: bool,
}

impl Brand {
    /// Create a new brand.
    pub fn new(id: BrandId, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            country: String::new(),
            is_verified: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_is_root() {
        let mut category = Category::new(CategoryId::new(1), "tractors", "Tractors");
        assert!(category.is_root());

        category.parent_id = Some(CategoryId::new(99));
        assert!(!category.is_root());
    }

    #[test]
    fn test_brand_creation() {
        let brand = Brand::new(BrandId::new(3), "uztractor", "UzTractor");
        assert_eq!(brand.slug, "uztractor");
        assert!(!brand.is_verified);
    }
}
