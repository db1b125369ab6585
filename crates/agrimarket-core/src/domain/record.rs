use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ExportDate, MarketIndicator, Product, ValidationError};

/// Immutable historical export transaction.
///
/// Created once at ingestion and never mutated. The indicator map may be
/// partial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub date: ExportDate,
    pub product: Product,
    pub destination: String,
    pub volume_tons: f64,
    pub price_per_ton: Decimal,
    #[serde(default)]
    pub indicators: BTreeMap<MarketIndicator, f64>,
}

impl ExportRecord {
    pub fn new(
        date: ExportDate,
        product: Product,
        destination: impl Into<String>,
        volume_tons: f64,
        price_per_ton: Decimal,
        indicators: BTreeMap<MarketIndicator, f64>,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("volume_tons", volume_tons)?;
        if price_per_ton.is_sign_negative() {
            return Err(ValidationError::NegativeValue {
                field: "price_per_ton",
            });
        }

        let destination = destination.into();
        if destination.trim().is_empty() {
            return Err(ValidationError::EmptyDestination);
        }

        Ok(Self {
            date,
            product,
            destination,
            volume_tons,
            price_per_ton,
            indicators,
        })
    }

    /// Revenue contribution of this record at full precision.
    pub fn revenue(&self) -> Decimal {
        let volume = Decimal::from_f64_retain(self.volume_tons).unwrap_or_default();
        self.price_per_ton * volume
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
