//! Heuristic short-term price forecasting.
//!
//! The baseline model is a trend-adjusted moving average over the most recent
//! records for a (product, destination) pair. The enhanced model layers a
//! bounded perturbation on top of the baseline and never surfaces its own
//! failures.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{info, warn};

use crate::{
    ExportDate, ExportRecord, PredictionError, PredictionResult, PredictionStatus, Product,
};

/// Number of most-recent records a forecast may consider.
const WINDOW: usize = 12;
/// Candidate count at which the trend adjustment kicks in.
const TREND_MIN_CANDIDATES: usize = 6;
const PRICE_SCALE: u32 = 2;

/// Price prediction model.
pub trait Predictor {
    fn predict(
        &self,
        history: &[ExportRecord],
        target_date: ExportDate,
        product: Product,
        destination: &str,
    ) -> Result<PredictionResult, PredictionError>;

    /// Model identifier recorded on results.
    fn model_name(&self) -> &str;
}

/// Trend-adjusted moving-average baseline.
#[derive(Debug, Clone, Default)]
pub struct MovingAveragePredictor;

impl MovingAveragePredictor {
    pub const MODEL_NAME: &'static str = "moving-average-baseline";
}

impl Predictor for MovingAveragePredictor {
    fn predict(
        &self,
        history: &[ExportRecord],
        target_date: ExportDate,
        product: Product,
        destination: &str,
    ) -> Result<PredictionResult, PredictionError> {
        let mut candidates: Vec<&ExportRecord> = history
            .iter()
            .filter(|r| r.product == product && r.destination == destination)
            .collect();

        // Relax to product-only when the exact pair has no history. The
        // relaxed match is reported as FallbackUsed so callers can tell it
        // apart from an exact match.
        let mut relaxed = false;
        if candidates.is_empty() {
            relaxed = true;
            candidates = history.iter().filter(|r| r.product == product).collect();
        }

        if candidates.is_empty() {
            return Err(PredictionError::NoHistoricalData {
                product,
                destination: destination.to_owned(),
                target_date,
            });
        }

        candidates.sort_by(|a, b| b.date.cmp(&a.date));
        candidates.truncate(WINDOW);

        let prices: Vec<Decimal> = candidates.iter().map(|r| r.price_per_ton).collect();
        let mut predicted = mean_rounded(&prices);

        if prices.len() >= TREND_MIN_CANDIDATES {
            let recent = mean_rounded(&prices[0..3]);
            let older = mean_rounded(&prices[3..6]);
            let trend = ((recent - older) / Decimal::TWO)
                .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
            predicted += trend;
        }

        let confidence = 0.7_f64.min(0.3 + prices.len() as f64 / 20.0);
        let status = if relaxed {
            warn!(%product, destination, "no exact destination history, relaxed to product-only match");
            PredictionStatus::FallbackUsed
        } else {
            PredictionStatus::Success
        };

        info!(
            %product,
            destination,
            %target_date,
            candidates = prices.len(),
            %predicted,
            confidence,
            "baseline prediction computed"
        );

        Ok(PredictionResult {
            target_date,
            product,
            destination: destination.to_owned(),
            predicted_price_per_ton: predicted.max(Decimal::ZERO),
            confidence,
            status,
            model: Self::MODEL_NAME.to_owned(),
        })
    }

    fn model_name(&self) -> &str {
        Self::MODEL_NAME
    }
}

/// Enhancement layer simulating a more sophisticated model.
///
/// Wraps the baseline as a fallback delegate: the baseline price is scaled by
/// a bounded random factor in `[0.95, 1.05]` and the confidence raised by a
/// fixed bonus. Results are always tagged `FallbackUsed` because no learned
/// model actually runs.
#[derive(Debug, Clone, Default)]
pub struct EnhancedPredictor {
    delegate: MovingAveragePredictor,
}

impl EnhancedPredictor {
    pub const MODEL_NAME: &'static str = "enhanced-heuristic";

    const CONFIDENCE_BONUS: f64 = 0.1;
    const CONFIDENCE_CAP: f64 = 0.85;
    /// Applied to the baseline confidence when the enhancement stage fails.
    const DEGRADE_FACTOR: f64 = 0.8;
}

impl Predictor for EnhancedPredictor {
    fn predict(
        &self,
        history: &[ExportRecord],
        target_date: ExportDate,
        product: Product,
        destination: &str,
    ) -> Result<PredictionResult, PredictionError> {
        // A missing product history is the one hard failure and propagates.
        let baseline = self
            .delegate
            .predict(history, target_date, product, destination)?;

        let factor = 0.95 + fastrand::f64() * 0.10;
        match Decimal::from_f64_retain(factor) {
            Some(factor) => {
                let enhanced = (baseline.predicted_price_per_ton * factor)
                    .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
                Ok(PredictionResult {
                    predicted_price_per_ton: enhanced.max(Decimal::ZERO),
                    confidence: Self::CONFIDENCE_CAP
                        .min(baseline.confidence + Self::CONFIDENCE_BONUS),
                    status: PredictionStatus::FallbackUsed,
                    model: Self::MODEL_NAME.to_owned(),
                    ..baseline
                })
            }
            None => {
                warn!(%product, destination, "enhancement stage failed, degrading to baseline");
                Ok(PredictionResult {
                    confidence: baseline.confidence * Self::DEGRADE_FACTOR,
                    status: PredictionStatus::FallbackUsed,
                    model: Self::MODEL_NAME.to_owned(),
                    ..baseline
                })
            }
        }
    }

    fn model_name(&self) -> &str {
        Self::MODEL_NAME
    }
}

fn mean_rounded(prices: &[Decimal]) -> Decimal {
    if prices.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = prices.iter().copied().sum();
    (sum / Decimal::from(prices.len() as u64))
        .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn record(date: &str, product: Product, destination: &str, price: Decimal) -> ExportRecord {
        ExportRecord::new(
            ExportDate::parse(date).expect("date"),
            product,
            destination,
            10.0,
            price,
            BTreeMap::new(),
        )
        .expect("record")
    }

    fn target() -> ExportDate {
        ExportDate::parse("2025-03-01").expect("date")
    }

    #[test]
    fn single_record_yields_its_price_and_low_confidence() {
        let history = vec![record("2025-01-15", Product::OliveOil, "France", dec!(1000.00))];
        let result = MovingAveragePredictor::default()
            .predict(&history, target(), Product::OliveOil, "France")
            .expect("must predict");

        assert_eq!(result.predicted_price_per_ton, dec!(1000.00));
        assert!((result.confidence - 0.35).abs() < 1e-9);
        assert_eq!(result.status, PredictionStatus::Success);
    }

    #[test]
    fn fewer_than_six_candidates_skip_trend() {
        let history = vec![
            record("2025-01-10", Product::OliveOil, "France", dec!(8000.00)),
            record("2025-02-10", Product::OliveOil, "France", dec!(8200.00)),
        ];
        let result = MovingAveragePredictor::default()
            .predict(&history, target(), Product::OliveOil, "France")
            .expect("must predict");

        assert_eq!(result.predicted_price_per_ton, dec!(8100.00));
    }

    #[test]
    fn six_candidates_apply_trend_adjustment() {
        // Newest first: 1200,1200,1200 then 1000,1000,1000.
        // base = 1100.00, trend = (1200 - 1000) / 2 = 100.00.
        let history = vec![
            record("2025-01-01", Product::Dates, "Germany", dec!(1000.00)),
            record("2025-01-02", Product::Dates, "Germany", dec!(1000.00)),
            record("2025-01-03", Product::Dates, "Germany", dec!(1000.00)),
            record("2025-01-04", Product::Dates, "Germany", dec!(1200.00)),
            record("2025-01-05", Product::Dates, "Germany", dec!(1200.00)),
            record("2025-01-06", Product::Dates, "Germany", dec!(1200.00)),
        ];
        let result = MovingAveragePredictor::default()
            .predict(&history, target(), Product::Dates, "Germany")
            .expect("must predict");

        assert_eq!(result.predicted_price_per_ton, dec!(1200.00));
        assert!((result.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn relaxed_destination_match_is_tagged_fallback() {
        let history = vec![record("2025-01-15", Product::Citrus, "Italy", dec!(1500.00))];
        let result = MovingAveragePredictor::default()
            .predict(&history, target(), Product::Citrus, "Japan")
            .expect("must predict");

        assert_eq!(result.status, PredictionStatus::FallbackUsed);
        assert_eq!(result.predicted_price_per_ton, dec!(1500.00));
        assert_eq!(result.destination, "Japan");
    }

    #[test]
    fn missing_product_history_fails_with_parameters() {
        let history = vec![record("2025-01-15", Product::Citrus, "Italy", dec!(1500.00))];
        let err = MovingAveragePredictor::default()
            .predict(&history, target(), Product::Almonds, "Italy")
            .expect_err("must fail");

        match err {
            PredictionError::NoHistoricalData {
                product,
                destination,
                ..
            } => {
                assert_eq!(product, Product::Almonds);
                assert_eq!(destination, "Italy");
            }
        }
    }

    #[test]
    fn enhanced_price_stays_within_perturbation_bounds() {
        let history = vec![record("2025-01-15", Product::OliveOil, "France", dec!(1000.00))];
        let result = EnhancedPredictor::default()
            .predict(&history, target(), Product::OliveOil, "France")
            .expect("must predict");

        assert!(result.predicted_price_per_ton >= dec!(950.00));
        assert!(result.predicted_price_per_ton <= dec!(1050.00));
        assert_eq!(result.status, PredictionStatus::FallbackUsed);
        assert_eq!(result.model, EnhancedPredictor::MODEL_NAME);
        assert!(result.confidence <= 0.85);
        assert!((result.confidence - 0.45).abs() < 1e-9);
    }

    #[test]
    fn predicted_price_never_goes_negative() {
        // Newest three at zero, ranks 4-6 high, the rest zero:
        // base = 27000/12 = 2250, trend = (0 - 9000)/2 = -4500,
        // raw prediction -2250 must clamp to zero.
        let mut history = Vec::new();
        for day in 1..=12 {
            let price = if (7..=9).contains(&day) {
                dec!(9000.00)
            } else {
                dec!(0.00)
            };
            history.push(record(
                &format!("2025-01-{day:02}"),
                Product::Tomato,
                "Spain",
                price,
            ));
        }
        let result = MovingAveragePredictor::default()
            .predict(&history, target(), Product::Tomato, "Spain")
            .expect("must predict");

        assert_eq!(result.predicted_price_per_ton, Decimal::ZERO);
    }
}
