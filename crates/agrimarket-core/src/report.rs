//! Market intelligence report generation boundary.
//!
//! The engine supplies well-formed input (working set, prediction history,
//! fresh statistics); generators may be backed by an LLM endpoint or the
//! deterministic template below.

use std::fmt::Write as _;

use thiserror::Error;
use tracing::info;

use crate::analytics::{self, StatisticsSnapshot};
use crate::{ExportDate, ExportRecord, PredictionResult};

/// Report generator failures.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report backend unavailable: {reason}")]
    BackendUnavailable { reason: String },
}

/// Produces a market intelligence report from analysis output.
pub trait ReportGenerator {
    fn generate_report(
        &self,
        records: &[ExportRecord],
        predictions: &[PredictionResult],
        statistics: &StatisticsSnapshot,
    ) -> Result<String, ReportError>;
}

/// Structured data summary shared by all report backends.
///
/// LLM-backed generators feed this to the model as prompt context; the
/// template generator embeds parts of it directly.
pub fn prompt_summary(
    records: &[ExportRecord],
    predictions: &[PredictionResult],
    statistics: &StatisticsSnapshot,
) -> String {
    let mut summary = String::from("# Agricultural Export Market Intelligence Report\n\n");

    summary.push_str("## Historical Data Summary\n");
    let _ = writeln!(summary, "- Total Records: {}", records.len());
    if let (Some(min), Some(max)) = (analytics::min_date(records), analytics::max_date(records)) {
        let _ = writeln!(summary, "- Date Range: {min} to {max}");
    }

    summary.push_str("\n## Recent Predictions\n");
    if predictions.is_empty() {
        summary.push_str("- No predictions available\n");
    } else {
        for prediction in predictions {
            let _ = writeln!(
                summary,
                "- {}: {} TND/ton (confidence: {:.1}%) for {} on {}",
                prediction.product,
                prediction.predicted_price_per_ton,
                prediction.confidence * 100.0,
                prediction.destination,
                prediction.target_date,
            );
        }
    }

    summary.push_str("\n## Key Statistics\n");
    for (name, value) in statistics.entries() {
        let _ = writeln!(summary, "- {name}: {value}");
    }

    summary
}

/// Deterministic markdown report requiring no external services.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateReportGenerator;

impl ReportGenerator for TemplateReportGenerator {
    fn generate_report(
        &self,
        records: &[ExportRecord],
        predictions: &[PredictionResult],
        statistics: &StatisticsSnapshot,
    ) -> Result<String, ReportError> {
        let rule = "=".repeat(80);
        let generated = ExportDate::from_date(time::OffsetDateTime::now_utc().date());

        let mut report = String::new();
        let _ = writeln!(report, "{rule}");
        let _ = writeln!(report, "AGRICULTURAL EXPORT MARKET INTELLIGENCE REPORT");
        let _ = writeln!(report, "Generated: {generated}");
        let _ = writeln!(report, "{rule}\n");

        report.push_str("## Executive Summary\n");
        report.push_str(
            "This report analyzes agricultural export trends and provides price \
             forecasts derived from historical transaction data.\n\n",
        );

        report.push_str("## Historical Data Analysis\n");
        if records.is_empty() {
            report.push_str("No historical data available.\n");
        } else {
            let _ = writeln!(report, "Total export records analyzed: {}", records.len());
            report.push_str("\nRecords by product:\n");
            for (product, count) in analytics::count_by(records, |r| r.product) {
                let _ = writeln!(report, "  - {product}: {count} records");
            }
        }

        report.push_str("\n## Price Predictions\n");
        if predictions.is_empty() {
            report.push_str("No predictions available at this time.\n");
        } else {
            for prediction in predictions {
                let _ = writeln!(
                    report,
                    "**{}** to {}",
                    prediction.product, prediction.destination
                );
                let _ = writeln!(
                    report,
                    "  - Predicted Price: {} TND/ton",
                    prediction.predicted_price_per_ton
                );
                let _ = writeln!(report, "  - Target Date: {}", prediction.target_date);
                let _ = writeln!(
                    report,
                    "  - Confidence: {:.1}%",
                    prediction.confidence * 100.0
                );
                let _ = writeln!(report, "  - Model: {}", prediction.model);
                let _ = writeln!(report, "  - Status: {}\n", prediction.status);
            }
        }

        report.push_str("## Market Statistics\n");
        for (name, value) in statistics.entries() {
            let _ = writeln!(report, "- **{name}**: {value}");
        }

        report.push_str("\n## Recommendations\n");
        report.push_str("Based on the analysis:\n");
        report.push_str("1. Monitor price trends closely for products with high volatility.\n");
        report.push_str("2. Consider diversifying export destinations to reduce market risk.\n");
        report.push_str(
            "3. Treat forecasts as guidance and validate against current market conditions.\n",
        );

        let _ = writeln!(report, "\n{rule}");
        let _ = writeln!(report, "End of Report");
        let _ = writeln!(report, "{rule}");

        info!(chars = report.len(), "template report generated");
        Ok(report)
    }
}
