use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ExportDate, Product};

/// Outcome category of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionStatus {
    /// Exact product/destination history backed the estimate.
    Success,
    /// A degraded path ran: destination relaxed, or the enhancement layer
    /// substituted for a learned model.
    FallbackUsed,
    Failed,
}

impl PredictionStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::FallbackUsed => "fallback_used",
            Self::Failed => "failed",
        }
    }
}

impl Display for PredictionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable output of a single forecast query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub target_date: ExportDate,
    pub product: Product,
    pub destination: String,
    /// Never negative; fixed-point with 2-digit scale.
    pub predicted_price_per_ton: Decimal,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub status: PredictionStatus,
    pub model: String,
}
