//! Behavior-driven tests for RecordSet analytics.
//!
//! These tests verify the aggregation semantics users see: rounding,
//! grouping order, and the handling of empty input.

use agrimarket_core::{analytics, records_to_csv, Product};
use agrimarket_tests::record;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Averages and rounding
// =============================================================================

#[test]
fn when_user_averages_prices_the_result_matches_the_arithmetic_mean() {
    // Given: Three records with a mean that is not representable in 2 digits
    let records = vec![
        record("2025-01-01", Product::OliveOil, "France", 10.0, dec!(8000.00)),
        record("2025-01-02", Product::OliveOil, "France", 10.0, dec!(8000.00)),
        record("2025-01-03", Product::OliveOil, "France", 10.0, dec!(8000.01)),
    ];

    // When: The average price is computed
    let average = analytics::average_price(&records);

    // Then: It is within rounding tolerance of the true mean and non-negative
    // true mean = 8000.00333...
    assert_eq!(average, dec!(8000.00));
    assert!(average >= Decimal::ZERO);
}

#[test]
fn when_the_mean_lands_on_a_midpoint_it_rounds_half_up() {
    // (1.00 + 1.01) / 2 = 1.005 -> 1.01
    let records = vec![
        record("2025-01-01", Product::Dates, "Germany", 1.0, dec!(1.00)),
        record("2025-01-02", Product::Dates, "Germany", 1.0, dec!(1.01)),
    ];

    assert_eq!(analytics::average_price(&records), dec!(1.01));
}

#[test]
fn when_user_averages_an_empty_set_the_result_is_zero_not_an_error() {
    assert_eq!(analytics::average_price(&[]), Decimal::ZERO);
}

// =============================================================================
// Revenue grouping
// =============================================================================

#[test]
fn when_user_groups_revenue_by_product_full_precision_is_kept() {
    // Given: Two olive oil shipments: 100.00 x 10t and 200.00 x 5t
    let records = vec![
        record("2025-01-01", Product::OliveOil, "France", 10.0, dec!(100.00)),
        record("2025-02-01", Product::OliveOil, "Italy", 5.0, dec!(200.00)),
    ];

    // When: Revenue is grouped by product
    let revenue = analytics::revenue_by_product(&records);

    // Then: The sum is exactly 2000.00
    assert_eq!(revenue.get(&Product::OliveOil), Some(&dec!(2000.00)));
}

#[test]
fn when_user_groups_revenue_products_appear_in_natural_order() {
    let records = vec![
        record("2025-01-01", Product::Harissa, "Libya", 1.0, dec!(5000.00)),
        record("2025-01-02", Product::Citrus, "Italy", 1.0, dec!(1500.00)),
        record("2025-01-03", Product::OliveOil, "France", 1.0, dec!(8000.00)),
    ];

    let products: Vec<Product> = analytics::revenue_by_product(&records)
        .keys()
        .copied()
        .collect();
    assert_eq!(
        products,
        vec![Product::OliveOil, Product::Citrus, Product::Harissa]
    );
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn when_user_filters_records_order_is_preserved_and_input_untouched() {
    let records = vec![
        record("2025-01-03", Product::OliveOil, "France", 1.0, dec!(8000.00)),
        record("2025-01-01", Product::Dates, "Germany", 1.0, dec!(3000.00)),
        record("2025-01-02", Product::OliveOil, "Italy", 1.0, dec!(8100.00)),
    ];

    let filtered = analytics::filter(&records, |r| r.product == Product::OliveOil);

    let destinations: Vec<&str> = filtered.iter().map(|r| r.destination.as_str()).collect();
    assert_eq!(destinations, vec!["France", "Italy"]);
    assert_eq!(records.len(), 3, "input must not be mutated");
}

#[test]
fn when_user_filters_twice_with_the_same_predicate_nothing_changes() {
    let records = vec![
        record("2025-01-01", Product::OliveOil, "France", 1.0, dec!(8000.00)),
        record("2025-01-02", Product::Dates, "Germany", 1.0, dec!(3000.00)),
    ];

    let once = analytics::filter(&records, |r| r.product == Product::OliveOil);
    let twice = analytics::filter(&once, |r| r.product == Product::OliveOil);

    assert_eq!(once, twice, "filter must be idempotent");
}

// =============================================================================
// Volume statistics and date bounds
// =============================================================================

#[test]
fn when_user_summarizes_volume_of_an_empty_set_aggregates_are_flagged_absent() {
    let stats = analytics::volume_stats(&[]);

    assert_eq!(stats.count, 0);
    assert_eq!(stats.sum, 0.0);
    assert!(stats.average.is_none(), "average must be absent, not zero");
    assert!(stats.min.is_none());
    assert!(stats.max.is_none());
}

#[test]
fn when_user_summarizes_volume_all_aggregates_are_present() {
    let records = vec![
        record("2025-01-01", Product::Tomato, "Spain", 10.0, dec!(1200.00)),
        record("2025-01-02", Product::Tomato, "Spain", 30.0, dec!(1300.00)),
    ];

    let stats = analytics::volume_stats(&records);
    assert_eq!(stats.count, 2);
    assert_eq!(stats.sum, 40.0);
    assert_eq!(stats.average, Some(20.0));
    assert_eq!(stats.min, Some(10.0));
    assert_eq!(stats.max, Some(30.0));
}

#[test]
fn when_records_span_years_months_collapse_by_calendar_month() {
    let records = vec![
        record("2023-06-10", Product::Almonds, "USA", 1.0, dec!(12000.00)),
        record("2024-06-20", Product::Almonds, "USA", 1.0, dec!(14000.00)),
        record("2024-07-01", Product::Almonds, "USA", 1.0, dec!(13000.00)),
    ];

    let by_month = analytics::average_price_by_month(&records);
    assert_eq!(by_month.len(), 2);
    assert_eq!(by_month.get(&6), Some(&dec!(13000.00)));
    assert_eq!(by_month.get(&7), Some(&dec!(13000.00)));
}

#[test]
fn when_user_asks_for_date_bounds_of_an_empty_set_none_is_returned() {
    assert!(analytics::min_date(&[]).is_none());
    assert!(analytics::max_date(&[]).is_none());
}

#[test]
fn when_user_lists_destinations_duplicates_collapse() {
    let records = vec![
        record("2025-01-01", Product::Citrus, "Italy", 1.0, dec!(1500.00)),
        record("2025-01-02", Product::Citrus, "Italy", 1.0, dec!(1550.00)),
        record("2025-01-03", Product::Citrus, "France", 1.0, dec!(1600.00)),
    ];

    let destinations = analytics::destinations(&records);
    assert_eq!(destinations.len(), 2);
    assert!(destinations.contains("Italy"));
    assert!(destinations.contains("France"));
}

// =============================================================================
// Export serialization
// =============================================================================

#[test]
fn when_user_exports_csv_fields_follow_the_contract_order() {
    let records = vec![record(
        "2025-01-15",
        Product::OliveOil,
        "France",
        12.5,
        dec!(8000.00),
    )];

    let csv = records_to_csv(&records);
    let mut lines = csv.lines();

    assert_eq!(
        lines.next(),
        Some("date,product,destination,volume_tons,price_per_ton")
    );
    assert_eq!(
        lines.next(),
        Some("2025-01-15,olive-oil,France,12.50,8000.00")
    );
}
