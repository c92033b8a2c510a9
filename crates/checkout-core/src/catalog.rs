//! # Pricing Catalog
//!
//! Immutable SKU → pricing rule lookup, fixed at construction.
//! Catalogs can be built in code or loaded from a TOML document:
//!
//! ```toml
//! [[rules]]
//! sku = "A"
//! unit_price = 50
//! offer = { kind = "bundle", quantity = 3, price = 130 }
//!
//! [[rules]]
//! sku = "C"
//! unit_price = 20
//! ```

use crate::error::{CheckoutError, CheckoutResult};
use crate::pricing::{PricingRule, SpecialOffer, Sku};
use serde::Deserialize;
use std::collections::HashMap;

/// Read-only pricing table shared by any number of checkouts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingCatalog {
    rules: HashMap<Sku, PricingRule>,
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    rules: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    sku: Sku,
    unit_price: u64,
    #[serde(default)]
    offer: SpecialOffer,
}

impl PricingCatalog {
    /// Build a catalog from `(sku, rule)` pairs.
    ///
    /// Every rule is validated and each SKU may appear only once.
    pub fn new<S, I>(rules: I) -> CheckoutResult<Self>
    where
        S: Into<Sku>,
        I: IntoIterator<Item = (S, PricingRule)>,
    {
        let mut table = HashMap::new();

        for (sku, rule) in rules {
            let sku = sku.into();
            if sku.as_str().is_empty() {
                return Err(CheckoutError::invalid_rule("", "SKU must not be empty"));
            }
            rule.validate(&sku)?;

            if table.contains_key(&sku) {
                return Err(CheckoutError::DuplicateSku {
                    sku: sku.to_string(),
                });
            }
            table.insert(sku, rule);
        }

        Ok(Self { rules: table })
    }

    /// An empty catalog; every scan against it is rejected
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> CheckoutResult<Self> {
        let document: CatalogDocument = toml::from_str(toml_str)?;

        Self::new(document.rules.into_iter().map(|entry| {
            (
                entry.sku,
                PricingRule {
                    unit_price: entry.unit_price,
                    offer: entry.offer,
                },
            )
        }))
    }

    /// Check whether the SKU can be scanned
    pub fn has_sku(&self, sku: &str) -> bool {
        self.rules.contains_key(sku)
    }

    /// Find the rule for a SKU
    pub fn rule_for(&self, sku: &str) -> Option<&PricingRule> {
        self.rules.get(sku)
    }

    /// All SKUs in the catalog, sorted
    pub fn skus(&self) -> Vec<&Sku> {
        let mut skus: Vec<&Sku> = self.rules.keys().collect();
        skus.sort();
        skus
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
