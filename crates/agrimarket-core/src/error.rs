use thiserror::Error;

use crate::{ExportDate, Product};

/// Validation and contract errors exposed by `agrimarket-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid date '{value}', expected ISO-8601 YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("invalid product '{value}', expected one of olive-oil, dates, citrus, tomato, almonds, harissa")]
    InvalidProduct { value: String },

    #[error("invalid indicator '{value}', expected one of usd-tnd, eur-tnd, brent-oil, inflation-rate, shipping-index, rainfall-index")]
    InvalidIndicator { value: String },

    #[error("destination cannot be empty")]
    EmptyDestination,

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
}

/// Failures the forecast engine surfaces to callers.
///
/// Everything other than a complete absence of history degrades to a
/// lower-confidence result instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PredictionError {
    #[error(
        "no historical data for product '{product}' (destination '{destination}', target {target_date})"
    )]
    NoHistoricalData {
        product: Product,
        destination: String,
        target_date: ExportDate,
    },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
