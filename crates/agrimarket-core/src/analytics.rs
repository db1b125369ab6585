//! Pure aggregation utilities over ordered export record sets.
//!
//! Every function here is a total computation: empty input yields zero-valued
//! or explicitly absent aggregates, never a panic or an error.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{ExportDate, ExportRecord, Product};

/// Display scale for monetary aggregates.
const PRICE_SCALE: u32 = 2;

/// Return records satisfying `predicate`, order preserved, input untouched.
pub fn filter<P>(records: &[ExportRecord], predicate: P) -> Vec<ExportRecord>
where
    P: Fn(&ExportRecord) -> bool,
{
    records.iter().filter(|r| predicate(r)).cloned().collect()
}

/// Summary of exported volume across a record set.
///
/// `average`, `min`, and `max` are `None` for empty input rather than a
/// misleading zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeStats {
    pub count: usize,
    pub sum: f64,
    pub average: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

pub fn volume_stats(records: &[ExportRecord]) -> VolumeStats {
    if records.is_empty() {
        return VolumeStats {
            count: 0,
            sum: 0.0,
            average: None,
            min: None,
            max: None,
        };
    }

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        sum += record.volume_tons;
        min = min.min(record.volume_tons);
        max = max.max(record.volume_tons);
    }

    VolumeStats {
        count: records.len(),
        sum,
        average: Some(sum / records.len() as f64),
        min: Some(min),
        max: Some(max),
    }
}

/// Arithmetic mean of price-per-ton, rounded half-up to 2 digits.
///
/// Returns zero for empty input.
pub fn average_price(records: &[ExportRecord]) -> Decimal {
    mean_price(records.iter().map(|r| r.price_per_ton))
}

/// Total revenue per product in natural enum order.
///
/// Summation keeps full precision; rounding is left to the display layer.
pub fn revenue_by_product(records: &[ExportRecord]) -> BTreeMap<Product, Decimal> {
    let mut revenue = BTreeMap::new();
    for record in records {
        *revenue.entry(record.product).or_insert(Decimal::ZERO) += record.revenue();
    }
    revenue
}

/// Total revenue per destination country, lexicographic order.
pub fn revenue_by_destination(records: &[ExportRecord]) -> BTreeMap<String, Decimal> {
    let mut revenue = BTreeMap::new();
    for record in records {
        *revenue
            .entry(record.destination.clone())
            .or_insert(Decimal::ZERO) += record.revenue();
    }
    revenue
}

/// Mean price per calendar month (1..=12), collapsing across years.
pub fn average_price_by_month(records: &[ExportRecord]) -> BTreeMap<u8, Decimal> {
    let mut grouped: BTreeMap<u8, Vec<Decimal>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.date.month())
            .or_default()
            .push(record.price_per_ton);
    }

    grouped
        .into_iter()
        .map(|(month, prices)| (month, mean_price(prices.into_iter())))
        .collect()
}

/// Distinct destination countries.
pub fn destinations(records: &[ExportRecord]) -> BTreeSet<String> {
    records.iter().map(|r| r.destination.clone()).collect()
}

pub fn min_date(records: &[ExportRecord]) -> Option<ExportDate> {
    records.iter().map(|r| r.date).min()
}

pub fn max_date(records: &[ExportRecord]) -> Option<ExportDate> {
    records.iter().map(|r| r.date).max()
}

/// Count records per key produced by `classifier`.
pub fn count_by<K, F>(records: &[ExportRecord], classifier: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&ExportRecord) -> K,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(classifier(record)).or_insert(0) += 1;
    }
    counts
}

/// Point-in-time statistics over a record set, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub total_records: usize,
    pub average_price: Decimal,
    pub volume: VolumeStats,
}

impl StatisticsSnapshot {
    pub fn compute(records: &[ExportRecord]) -> Self {
        Self {
            total_records: records.len(),
            average_price: average_price(records),
            volume: volume_stats(records),
        }
    }

    /// Ordered human-readable name/value pairs for display and report input.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = vec![
            (String::from("Total Records"), self.total_records.to_string()),
            (String::from("Average Price"), self.average_price.to_string()),
            (
                String::from("Total Volume (tons)"),
                format!("{:.2}", self.volume.sum),
            ),
        ];
        if let Some(average) = self.volume.average {
            entries.push((String::from("Avg Volume (tons)"), format!("{average:.2}")));
        }
        if let Some(min) = self.volume.min {
            entries.push((String::from("Min Volume (tons)"), format!("{min:.2}")));
        }
        if let Some(max) = self.volume.max {
            entries.push((String::from("Max Volume (tons)"), format!("{max:.2}")));
        }
        entries
    }
}

fn mean_price(prices: impl Iterator<Item = Decimal>) -> Decimal {
    let mut sum = Decimal::ZERO;
    let mut count: u64 = 0;
    for price in prices {
        sum += price;
        count += 1;
    }

    // Group sizes derived from present records cannot be zero, but this
    // helper is also reachable with externally supplied groups.
    if count == 0 {
        return Decimal::ZERO;
    }

    (sum / Decimal::from(count))
        .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
