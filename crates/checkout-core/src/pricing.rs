//! # Pricing Types
//!
//! SKUs, per-SKU pricing rules and the bundle-offer arithmetic.
//! All amounts are in the smallest currency unit.

use crate::error::{CheckoutError, CheckoutResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stock keeping unit. Case-sensitive, compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Sku {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Sku {
    fn from(sku: &str) -> Self {
        Self(sku.to_string())
    }
}

impl From<String> for Sku {
    fn from(sku: String) -> Self {
        Self(sku)
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional multi-buy offer attached to a single SKU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpecialOffer {
    /// Every unit is charged at the unit price
    #[default]
    #[serde(rename = "none")]
    NoOffer,
    /// Every `quantity` units are charged `price` together
    Bundle { quantity: u32, price: u64 },
}

impl SpecialOffer {
    pub fn bundle(quantity: u32, price: u64) -> Self {
        SpecialOffer::Bundle { quantity, price }
    }

    pub fn is_bundle(&self) -> bool {
        matches!(self, SpecialOffer::Bundle { .. })
    }
}

/// Pricing rule for one SKU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRule {
    /// Price of a single unit outside any completed bundle
    pub unit_price: u64,

    /// Special offer, if any
    #[serde(default)]
    pub offer: SpecialOffer,
}

impl PricingRule {
    /// Rule without a special offer
    pub fn unit(unit_price: u64) -> Self {
        Self {
            unit_price,
            offer: SpecialOffer::NoOffer,
        }
    }

    /// Rule with a "`quantity` for `price`" bundle offer
    pub fn with_bundle(unit_price: u64, quantity: u32, price: u64) -> Self {
        Self {
            unit_price,
            offer: SpecialOffer::bundle(quantity, price),
        }
    }

    /// Check the rule's invariants. A zero bundle quantity would make
    /// pricing undefined, so it never gets into a catalog.
    pub fn validate(&self, sku: &Sku) -> CheckoutResult<()> {
        if self.unit_price == 0 {
            return Err(CheckoutError::invalid_rule(
                sku.as_str(),
                "unit price must be positive",
            ));
        }

        if let SpecialOffer::Bundle { quantity, price } = self.offer {
            if quantity == 0 {
                return Err(CheckoutError::invalid_rule(
                    sku.as_str(),
                    "bundle quantity must be at least 1",
                ));
            }
            if price == 0 {
                return Err(CheckoutError::invalid_rule(
                    sku.as_str(),
                    "bundle price must be positive",
                ));
            }
        }

        Ok(())
    }

    /// Price `quantity` units of this SKU.
    pub fn price_for(&self, quantity: u32) -> u64 {
        self.split(quantity).2
    }

    /// Per-SKU breakdown for `quantity` units.
    pub fn line_total(&self, sku: &Sku, quantity: u32) -> LineTotal {
        let (bundles, remainder, subtotal) = self.split(quantity);
        LineTotal {
            sku: sku.clone(),
            quantity,
            bundles,
            remainder,
            subtotal,
        }
    }

    // (bundles, remainder, subtotal); leftovers are always charged at the unit price.
    // Amounts saturate at u64::MAX rather than wrapping.
    fn split(&self, quantity: u32) -> (u32, u32, u64) {
        match self.offer {
            SpecialOffer::Bundle {
                quantity: size,
                price,
            } => {
                let bundles = quantity / size;
                let remainder = quantity % size;
                let subtotal = u64::from(bundles)
                    .saturating_mul(price)
                    .saturating_add(u64::from(remainder).saturating_mul(self.unit_price));
                (bundles, remainder, subtotal)
            }
            SpecialOffer::NoOffer => (
                0,
                quantity,
                u64::from(quantity).saturating_mul(self.unit_price),
            ),
        }
    }
}

/// Priced quantity of a single SKU within a checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotal {
    pub sku: Sku,

    /// Units scanned
    pub quantity: u32,

    /// Completed bundles (always 0 without an offer)
    pub bundles: u32,

    /// Units charged at the unit price
    pub remainder: u32,

    /// Amount charged for this SKU
    pub subtotal: u64,
}
