//! Price visibility rules for catalog snapshots.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Pricing block attached to a product snapshot.
///
/// B2B pricing may be withheld from the current viewer (guests, unverified
/// buyers). A hidden or missing price contributes nothing to cart subtotals;
/// this is the visible-price-only subtotal policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProductPricing {
    /// Whether guests may see this product's price at all.
    pub show_to_guests: bool,
    /// Whether the current viewer may see the price.
    pub can_see_price: bool,
    /// Price in US dollars, if set.
    pub price_usd: Option<Money>,
    /// Price in Uzbek so'm, if set.
    pub price_uzs: Option<Money>,
}

impl ProductPricing {
    /// Pricing visible to everyone, with a USD amount in cents.
    pub fn usd(amount_cents: i64) -> Self {
        Self {
            show_to_guests: true,
            can_see_price: true,
            price_usd: Some(Money::new(amount_cents, Currency::USD)),
            price_uzs: None,
        }
    }

    /// Pricing withheld from the current viewer.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// The USD price, if the viewer may see it.
    pub fn visible_usd(&self) -> Option<Money> {
        if self.can_see_price {
            self.price_usd
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_usd() {
        let pricing = ProductPricing::usd(12_500_00);
        assert_eq!(
            pricing.visible_usd(),
            Some(Money::new(12_500_00, Currency::USD))
        );
    }

    #[test]
    fn test_hidden_price_is_not_visible() {
        let mut pricing = ProductPricing::usd(12_500_00);
        pricing.can_see_price = false;

        // Price is set but the viewer may not see it
        assert!(pricing.price_usd.is_some());
        assert_eq!(pricing.visible_usd(), None);
    }

    #[test]
    fn test_unpriced_product() {
        let pricing = ProductPricing {
            show_to_guests: true,
            can_see_price: true,
            price_usd: None,
            price_uzs: None,
        };
        assert_eq!(pricing.visible_usd(), None);
    }

    #[test]
    fn test_default_is_hidden() {
        assert_eq!(ProductPricing::default(), ProductPricing::hidden());
    }
}
