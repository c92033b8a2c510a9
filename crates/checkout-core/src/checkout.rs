//! # Checkout
//!
//! Per-transaction scan accumulator. Scans are validated against the
//! catalog; the total is a pure function of per-SKU counts, so scan
//! order never affects the price.

use crate::catalog::PricingCatalog;
use crate::error::{CheckoutError, CheckoutResult};
use crate::pricing::{LineTotal, Sku};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, warn};
use uuid::Uuid;

/// A single checkout transaction bound to a pricing catalog
#[derive(Debug, Clone)]
pub struct Checkout<'a> {
    id: Uuid,
    opened_at: DateTime<Utc>,
    catalog: &'a PricingCatalog,

    /// Scan history, in scan order
    scanned: Vec<Sku>,

    /// Units per SKU, kept in step with `scanned`
    counts: HashMap<Sku, u32>,
}

impl<'a> Checkout<'a> {
    /// Open a new checkout with a generated transaction ID
    pub fn new(catalog: &'a PricingCatalog) -> Self {
        Self {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            catalog,
            scanned: Vec::new(),
            counts: HashMap::new(),
        }
    }

    /// Record one unit of `sku`.
    ///
    /// Unknown SKUs are rejected with [`CheckoutError::InvalidSku`] and
    /// leave the checkout unchanged.
    pub fn scan(&mut self, sku: &str) -> CheckoutResult<()> {
        if !self.catalog.has_sku(sku) {
            warn!(checkout_id = %self.id, sku, "rejected scan of unknown SKU");
            return Err(CheckoutError::InvalidSku {
                sku: sku.to_string(),
            });
        }

        let sku = Sku::from(sku);
        let quantity = self.counts.entry(sku.clone()).or_insert(0);
        *quantity = quantity.saturating_add(1);
        debug!(checkout_id = %self.id, sku = %sku, quantity = *quantity, "scanned item");

        self.scanned.push(sku);
        Ok(())
    }

    /// Total price of everything scanned so far, saturating at `u64::MAX`
    pub fn total_price(&self) -> u64 {
        let total = self
            .line_totals()
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.subtotal));
        debug!(checkout_id = %self.id, items = self.scanned.len(), total, "computed total");
        total
    }

    /// Per-SKU breakdown, sorted by SKU
    pub fn line_totals(&self) -> Vec<LineTotal> {
        let mut lines: Vec<LineTotal> = self
            .counts
            .iter()
            .filter_map(|(sku, &quantity)| {
                // Only SKUs accepted by `scan` are counted, so the lookup always hits
                self.catalog
                    .rule_for(sku.as_str())
                    .map(|rule| rule.line_total(sku, quantity))
            })
            .collect();
        lines.sort_by(|a, b| a.sku.cmp(&b.sku));
        lines
    }

    /// Scanned SKUs in scan order
    pub fn scanned_items(&self) -> &[Sku] {
        &self.scanned
    }

    /// Units of `sku` scanned so far
    pub fn quantity_of(&self, sku: &str) -> u32 {
        self.counts.get(sku).copied().unwrap_or(0)
    }

    /// Number of scanned units
    pub fn item_count(&self) -> usize {
        self.scanned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scanned.is_empty()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn catalog(&self) -> &'a PricingCatalog {
        self.catalog
    }
}
