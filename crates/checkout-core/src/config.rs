//! # Catalog Configuration
//!
//! Locates and loads the pricing catalog.
//! The catalog path comes from the environment (`.env` is honoured).

use crate::catalog::PricingCatalog;
use crate::error::{CheckoutError, CheckoutResult};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the catalog file
pub const CATALOG_PATH_ENV: &str = "CHECKOUT_CATALOG_PATH";

/// Locations probed when no path is configured
const DEFAULT_CATALOG_PATHS: [&str; 3] = [
    "config/pricing.toml",
    "../config/pricing.toml",
    "../../config/pricing.toml",
];

/// Where to load the pricing catalog from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Explicit catalog file; `None` probes the default locations
    pub catalog_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `CHECKOUT_CATALOG_PATH`
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            catalog_path: env::var(CATALOG_PATH_ENV)
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Config pointing at an explicit file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: Some(path.into()),
        }
    }

    /// Load the catalog.
    ///
    /// A configured path must exist and parse. Without one, the default
    /// locations are probed and an empty catalog is returned if none exist.
    pub fn load_catalog(&self) -> CheckoutResult<PricingCatalog> {
        if let Some(path) = &self.catalog_path {
            let content = std::fs::read_to_string(path).map_err(|e| {
                CheckoutError::Configuration(format!(
                    "failed to read catalog {}: {}",
                    path.display(),
                    e
                ))
            })?;
            return parse_catalog(path, &content);
        }

        for path in DEFAULT_CATALOG_PATHS {
            if let Ok(content) = std::fs::read_to_string(path) {
                return parse_catalog(Path::new(path), &content);
            }
        }

        tracing::warn!("No pricing catalog found, using empty catalog");
        Ok(PricingCatalog::empty())
    }
}

fn parse_catalog(path: &Path, content: &str) -> CheckoutResult<PricingCatalog> {
    let catalog = PricingCatalog::from_toml(content).map_err(|e| match e {
        CheckoutError::CatalogParse(msg) => {
            CheckoutError::CatalogParse(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })?;
    tracing::info!("Loaded {} pricing rules from {}", catalog.len(), path.display());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingRule;
    use std::fs;

    fn temp_catalog(content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("pricing-{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_configured_path() {
        let path = temp_catalog(
            r#"
            [[rules]]
            sku = "B"
            unit_price = 30
            offer = { kind = "bundle", quantity = 2, price = 45 }
            "#,
        );

        let catalog = CatalogConfig::with_path(&path).load_catalog().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(catalog.rule_for("B"), Some(&PricingRule::with_bundle(30, 2, 45)));
    }

    #[test]
    fn test_missing_configured_file() {
        let config = CatalogConfig::with_path("/nonexistent/pricing.toml");

        assert!(matches!(
            config.load_catalog(),
            Err(CheckoutError::Configuration(_))
        ));
    }

    #[test]
    fn test_parse_error_names_file() {
        let path = temp_catalog("rules = 5");

        let err = CatalogConfig::with_path(&path).load_catalog().unwrap_err();
        fs::remove_file(&path).ok();

        match err {
            CheckoutError::CatalogParse(msg) => assert!(msg.contains("pricing-")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_probes_known_locations() {
        let config = CatalogConfig::default();
        assert!(config.catalog_path.is_none());

        let config = CatalogConfig::with_path("config/pricing.toml");
        assert_eq!(config.catalog_path, Some(PathBuf::from("config/pricing.toml")));
    }
}
