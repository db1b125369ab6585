//! Shared fixtures for behavior-driven tests.

use std::collections::BTreeMap;

use agrimarket_core::{ExportDate, ExportRecord, Product};
use rust_decimal::Decimal;

/// Build a validated record, panicking on fixture mistakes.
pub fn record(
    date: &str,
    product: Product,
    destination: &str,
    volume_tons: f64,
    price_per_ton: Decimal,
) -> ExportRecord {
    ExportRecord::new(
        ExportDate::parse(date).expect("fixture date"),
        product,
        destination,
        volume_tons,
        price_per_ton,
        BTreeMap::new(),
    )
    .expect("fixture record")
}

pub fn date(value: &str) -> ExportDate {
    ExportDate::parse(value).expect("fixture date")
}
