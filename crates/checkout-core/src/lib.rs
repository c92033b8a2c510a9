//! # checkout-core
//!
//! Point-of-sale checkout pricing engine.
//!
//! This crate provides:
//! - `Sku`, `PricingRule` and `SpecialOffer` for per-SKU pricing
//! - `PricingCatalog`, the immutable SKU lookup shared by checkouts
//! - `Checkout`, the per-transaction scan accumulator
//! - `CatalogConfig` for loading the catalog from `config/pricing.toml`
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use checkout_core::{Checkout, PricingCatalog, PricingRule};
//!
//! let catalog = PricingCatalog::new([
//!     ("A", PricingRule::with_bundle(50, 3, 130)),
//!     ("B", PricingRule::with_bundle(30, 2, 45)),
//!     ("C", PricingRule::unit(20)),
//! ])?;
//!
//! let mut checkout = Checkout::new(&catalog);
//! for sku in ["A", "B", "A", "A", "B"] {
//!     checkout.scan(sku)?;
//! }
//!
//! assert_eq!(checkout.total_price(), 175);
//! assert!(checkout.scan("Z").is_err());
//! # Ok::<(), checkout_core::CheckoutError>(())
//! ```

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod pricing;

// Re-exports for convenience
pub use catalog::PricingCatalog;
pub use checkout::Checkout;
pub use config::{CatalogConfig, CATALOG_PATH_ENV};
pub use error::{CheckoutError, CheckoutResult};
pub use pricing::{LineTotal, PricingRule, Sku, SpecialOffer};
