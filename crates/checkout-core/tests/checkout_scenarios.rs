//! End-to-end checkout scenarios against the shipped catalog layout.

use checkout_core::{CatalogConfig, Checkout, CheckoutError, LineTotal, PricingCatalog, PricingRule};
use std::path::PathBuf;

fn shipped_catalog() -> PricingCatalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/pricing.toml");
    CatalogConfig::with_path(path).load_catalog().unwrap()
}

fn total_for(catalog: &PricingCatalog, skus: &[&str]) -> u64 {
    let mut checkout = Checkout::new(catalog);
    for sku in skus {
        checkout.scan(sku).unwrap();
    }
    checkout.total_price()
}

#[test]
fn test_shipped_catalog() {
    let catalog = shipped_catalog();

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.rule_for("A"), Some(&PricingRule::with_bundle(50, 3, 130)));
    assert_eq!(catalog.rule_for("D"), Some(&PricingRule::unit(15)));
}

#[test]
fn test_multiple_offers_in_any_order() {
    let catalog = shipped_catalog();

    assert_eq!(total_for(&catalog, &["A", "B", "A", "A", "B"]), 175);
    assert_eq!(total_for(&catalog, &["B", "B", "A", "A", "A"]), 175);
    assert_eq!(total_for(&catalog, &["A", "A", "A", "B", "B"]), 175);
}

#[test]
fn test_every_rotation_prices_the_same() {
    let catalog = shipped_catalog();
    let mut basket = vec!["A", "B", "C", "A", "D", "B", "A", "A", "B", "C"];
    let expected = total_for(&catalog, &basket);

    // 4×A = 130 + 50, 3×B = 45 + 30, 2×C = 40, 1×D = 15
    assert_eq!(expected, 310);

    for _ in 0..basket.len() {
        basket.rotate_left(1);
        assert_eq!(total_for(&catalog, &basket), expected);
    }

    basket.reverse();
    assert_eq!(total_for(&catalog, &basket), expected);
}

#[test]
fn test_retry_after_invalid_scan() {
    let catalog = shipped_catalog();
    let mut checkout = Checkout::new(&catalog);

    checkout.scan("B").unwrap();
    let err = checkout.scan("b").unwrap_err();
    assert_eq!(err, CheckoutError::InvalidSku { sku: "b".into() });
    assert!(err.is_recoverable());

    checkout.scan("B").unwrap();
    assert_eq!(checkout.item_count(), 2);
    assert_eq!(checkout.total_price(), 45);
    assert_eq!(checkout.total_price(), 45);
}

#[test]
fn test_catalog_shared_between_checkouts() {
    let catalog = shipped_catalog();
    let mut first = Checkout::new(&catalog);
    let mut second = Checkout::new(&catalog);

    first.scan("A").unwrap();
    second.scan("C").unwrap();
    first.scan("A").unwrap();

    assert_eq!(first.total_price(), 100);
    assert_eq!(second.total_price(), 20);
    assert!(std::ptr::eq(first.catalog(), second.catalog()));
}

#[test]
fn test_line_totals_serialize() {
    let catalog = shipped_catalog();
    let mut checkout = Checkout::new(&catalog);
    for sku in ["B", "B", "B"] {
        checkout.scan(sku).unwrap();
    }

    let lines = checkout.line_totals();
    let json = serde_json::to_value(&lines).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            { "sku": "B", "quantity": 3, "bundles": 1, "remainder": 1, "subtotal": 75 }
        ])
    );

    let parsed: Vec<LineTotal> = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, lines);
}
