//! # Checkout Error Types
//!
//! Typed error handling for the checkout pricing engine.
//! Every fallible operation returns `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for catalog construction and scanning
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Scanned SKU has no entry in the pricing catalog
    #[error("Invalid SKU {sku} Scanned!")]
    InvalidSku { sku: String },

    /// A pricing rule failed validation while building the catalog
    #[error("Invalid pricing rule for {sku}: {reason}")]
    InvalidRule { sku: String, reason: String },

    /// The same SKU was supplied more than once
    #[error("Duplicate pricing rule for SKU {sku}")]
    DuplicateSku { sku: String },

    /// Catalog document could not be parsed
    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    /// Configuration errors (unreadable or missing catalog file)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CheckoutError {
    /// Returns true if the caller can carry on with the same checkout.
    ///
    /// A rejected scan leaves the checkout untouched, so the caller may
    /// retry with a corrected SKU. Catalog and configuration errors mean
    /// there is no usable catalog at all.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CheckoutError::InvalidSku { .. })
    }

    pub(crate) fn invalid_rule(sku: impl Into<String>, reason: impl Into<String>) -> Self {
        CheckoutError::InvalidRule {
            sku: sku.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for CheckoutError {
    fn from(err: toml::de::Error) -> Self {
        CheckoutError::CatalogParse(err.to_string())
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sku_message() {
        let err = CheckoutError::InvalidSku { sku: "Z".into() };
        assert_eq!(err.to_string(), "Invalid SKU Z Scanned!");
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(CheckoutError::InvalidSku { sku: "Z".into() }.is_recoverable());
        assert!(!CheckoutError::invalid_rule("A", "unit price must be positive").is_recoverable());
        assert!(!CheckoutError::Configuration("missing".into()).is_recoverable());
    }

    #[test]
    fn test_rule_error_message() {
        let err = CheckoutError::invalid_rule("B", "bundle quantity must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid pricing rule for B: bundle quantity must be at least 1"
        );
    }
}
