//! # Agrimarket Core
//!
//! Analytics and forecast engine for agricultural export market data.
//!
//! ## Overview
//!
//! This crate turns a time-series of export transactions into aggregate
//! market statistics, a heuristic short-term price forecast, and
//! terminal-renderable charts, with a reversible data-filtering workflow:
//!
//! - **Canonical domain values** for export records, products, market
//!   indicators, and prediction results
//! - **RecordSet utilities**: filtering, grouping, and summary statistics
//! - **Forecast engine**: trend-adjusted moving average with confidence
//!   scoring, plus an enhancement layer that degrades gracefully
//! - **Chart renderers** for ASCII bar and line art
//! - **Filter/undo session** with command-based single-step undo
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`analytics`] | Pure aggregation utilities and statistics snapshots |
//! | [`chart`] | ASCII bar and line chart renderers |
//! | [`domain`] | Domain values (ExportRecord, Product, PredictionResult) |
//! | [`error`] | Core error types |
//! | [`export`] | CSV/JSON record serialization |
//! | [`forecast`] | Predictor trait and heuristic models |
//! | [`report`] | Report generator boundary and template backend |
//! | [`repository`] | Record storage boundary |
//! | [`sample`] | Demo data generation |
//! | [`session`] | Working-set state machine with reversible filters |
//!
//! ## Quick Start
//!
//! ```rust
//! use agrimarket_core::{
//!     DashboardSession, MovingAveragePredictor, Predictor, Product,
//!     ExportDate, generate_sample_records,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = generate_sample_records()?;
//!     let mut session = DashboardSession::new(records);
//!
//!     session.apply_filter("olive oil", |r| r.product == Product::OliveOil);
//!
//!     let target = ExportDate::parse("2026-09-01")?;
//!     let result = MovingAveragePredictor::default().predict(
//!         session.analysis_records(),
//!         target,
//!         Product::OliveOil,
//!         "France",
//!     )?;
//!     println!("{} TND/ton", result.predicted_price_per_ton);
//!
//!     session.undo();
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Boundary validation and missing-history failures surface as structured
//! errors naming the offending parameters; numeric edge cases inside
//! aggregation and rendering (empty groups, zero range, zero maximum) are
//! recovered locally into defined degenerate results.
//!
//! The core is synchronous and single-threaded by contract: every operation
//! is a pure computation over an immutable snapshot. Hosts embedding a
//! session concurrently must serialize access to it.

pub mod analytics;
pub mod chart;
pub mod domain;
pub mod error;
pub mod export;
pub mod forecast;
pub mod report;
pub mod repository;
pub mod sample;
pub mod session;

// Re-export commonly used types at crate root for convenience

pub use analytics::{StatisticsSnapshot, VolumeStats};
pub use chart::{BarChart, ChartKind, ChartRenderer, LineChart, renderer_for};
pub use domain::{
    ExportDate, ExportRecord, MarketIndicator, PredictionResult, PredictionStatus, Product,
};
pub use error::{CoreError, PredictionError, ValidationError};
pub use export::{records_to_csv, records_to_json};
pub use forecast::{EnhancedPredictor, MovingAveragePredictor, Predictor};
pub use report::{ReportError, ReportGenerator, TemplateReportGenerator, prompt_summary};
pub use repository::{ExportRecordRepository, InMemoryExportRecordRepository};
pub use sample::generate_sample_records;
pub use session::{DashboardSession, FilterCommand, SessionEvent, SessionObserver};
