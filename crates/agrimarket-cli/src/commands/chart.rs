use agrimarket_core::{analytics, renderer_for, ChartKind, DashboardSession};
use rust_decimal::prelude::ToPrimitive;
use serde_json::json;

use crate::cli::{ChartArgs, ChartSeries};
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &ChartArgs, session: &DashboardSession) -> Result<CommandResult, CliError> {
    let records = session.analysis_records();

    let (title, kind, series) = match args.series {
        ChartSeries::BarRevenue => {
            let series: Vec<(String, f64)> = analytics::revenue_by_product(records)
                .into_iter()
                .map(|(product, revenue)| {
                    (product.to_string(), revenue.to_f64().unwrap_or_default())
                })
                .collect();
            ("Revenue by Product", ChartKind::Bar, series)
        }
        ChartSeries::LineMonthlyPrice => {
            // Zero-padded labels keep the lexicographic time axis in
            // calendar order.
            let series: Vec<(String, f64)> = analytics::average_price_by_month(records)
                .into_iter()
                .map(|(month, price)| {
                    (format!("M{month:02}"), price.to_f64().unwrap_or_default())
                })
                .collect();
            ("Average Price by Month", ChartKind::Line, series)
        }
    };

    let chart = renderer_for(kind).render(&series);
    let data = json!({
        "title": title,
        "series": series,
    });

    Ok(CommandResult::ok(data).with_text(format!("{title}\n{chart}")))
}
