//! Sample export data generation for demos.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use rust_decimal::{Decimal, RoundingStrategy};
use time::{Date, Month, OffsetDateTime};

use crate::{ExportDate, ExportRecord, MarketIndicator, Product, ValidationError};

const MONTHS: i32 = 24;
const DESTINATIONS: [&str; 9] = [
    "France", "Italy", "Spain", "Germany", "UK", "USA", "Canada", "Libya", "Algeria",
];

/// Generate 24 months of plausible export records ending at the current
/// month.
///
/// Driven by the process-wide `fastrand` generator; seed it for reproducible
/// output.
pub fn generate_sample_records() -> Result<Vec<ExportRecord>, ValidationError> {
    let today = OffsetDateTime::now_utc().date();
    let first_index = month_index(today) - (MONTHS - 1);

    let mut records = Vec::new();
    for offset in 0..MONTHS {
        let date = ExportDate::from_date(date_for_index(first_index + offset)?);
        let seasonal = 1.0 + 0.2 * (offset as f64 * PI / 6.0).sin();

        for product in Product::ALL {
            // Each product ships to 2-4 destinations per month.
            let shipments = 2 + fastrand::usize(0..3);
            for _ in 0..shipments {
                let destination = DESTINATIONS[fastrand::usize(0..DESTINATIONS.len())];
                let price = base_price(product) * seasonal;
                let volume = 10.0 + fastrand::f64() * 90.0;

                records.push(ExportRecord::new(
                    date,
                    product,
                    destination,
                    volume,
                    to_price(price),
                    indicators(),
                )?);
            }
        }
    }

    Ok(records)
}

fn base_price(product: Product) -> f64 {
    match product {
        Product::OliveOil => 8000.0 + fastrand::f64() * 2000.0,
        Product::Dates => 3000.0 + fastrand::f64() * 1000.0,
        Product::Citrus => 1500.0 + fastrand::f64() * 500.0,
        Product::Tomato => 1200.0 + fastrand::f64() * 400.0,
        Product::Almonds => 12000.0 + fastrand::f64() * 3000.0,
        Product::Harissa => 5000.0 + fastrand::f64() * 2000.0,
    }
}

/// Partial indicator map; shipping and rainfall are intentionally absent.
fn indicators() -> BTreeMap<MarketIndicator, f64> {
    BTreeMap::from([
        (MarketIndicator::UsdTnd, 3.0 + fastrand::f64() * 0.5),
        (MarketIndicator::EurTnd, 3.2 + fastrand::f64() * 0.4),
        (MarketIndicator::BrentOil, 70.0 + fastrand::f64() * 30.0),
        (MarketIndicator::InflationRate, 5.0 + fastrand::f64() * 3.0),
    ])
}

fn to_price(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Months since year zero, for month arithmetic across year boundaries.
fn month_index(date: Date) -> i32 {
    date.year() * 12 + (date.month() as i32 - 1)
}

fn date_for_index(index: i32) -> Result<Date, ValidationError> {
    let year = index.div_euclid(12);
    let month = Month::try_from((index.rem_euclid(12) + 1) as u8).map_err(|_| {
        ValidationError::InvalidDate {
            value: format!("month index {index}"),
        }
    })?;
    Date::from_calendar_date(year, month, 15).map_err(|_| ValidationError::InvalidDate {
        value: format!("month index {index}"),
    })
}
