//! CLI argument definitions for Agrimarket.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `stats` | Market statistics over the working record set |
//! | `chart` | Render an ASCII chart of an aggregate series |
//! | `predict` | Forecast a price for a (product, destination, date) query |
//! | `report` | Generate a market intelligence report |
//! | `export` | Serialize the working record set to CSV or JSON |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--data` | sample | JSON records file to analyze |
//! | `--seed` | random | Seed for sample data and the enhanced model |
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! Every command accepts the shared filter flags (`--product`,
//! `--destination`, `--from`, `--to`); each supplied flag is applied to the
//! session as a reversible filter before the command runs.
//!
//! # Examples
//!
//! ```bash
//! # Statistics over olive oil shipments to France
//! agrimarket stats --product olive-oil --destination France
//!
//! # Revenue bar chart
//! agrimarket chart bar-revenue
//!
//! # Price forecast with the enhanced model
//! agrimarket predict --product dates --destination Germany \
//!     --target-date 2026-09-01 --model enhanced
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Agricultural export analytics, forecasting, and market reports.
#[derive(Debug, Parser)]
#[command(
    name = "agrimarket",
    author,
    version,
    about = "Agricultural export analytics and price forecasting",
    long_about = "Agrimarket analyzes agricultural export transactions and produces \
market statistics, heuristic price forecasts, terminal charts, and \
narrative market reports.\n\
\n\
  • Aggregate statistics over filtered record sets\n\
  • Trend-adjusted moving-average price forecasts with confidence\n\
  • ASCII bar and line charts\n\
  • LLM-backed reports with a deterministic template fallback\n\
\n\
Use 'agrimarket <command> --help' for command-specific help."
)]
pub struct Cli {
    /// JSON file holding an array of export records.
    ///
    /// When omitted, 24 months of generated sample data are used.
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Seed for the random generator (sample data, enhanced model).
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 📊 Market statistics over the working record set.
    ///
    /// Record count, average price, and volume aggregates, computed after
    /// the filter flags are applied.
    Stats(StatsArgs),

    /// 📈 Render an ASCII chart of an aggregate series.
    ///
    /// # Examples
    ///
    ///   agrimarket chart bar-revenue
    ///   agrimarket chart line-monthly-price --product citrus
    Chart(ChartArgs),

    /// 🔮 Forecast a price for a (product, destination, date) query.
    ///
    /// The baseline model is a trend-adjusted moving average over the 12
    /// most recent matching records; the enhanced model layers a bounded
    /// perturbation and a confidence bonus on top.
    Predict(PredictArgs),

    /// 📝 Generate a market intelligence report.
    ///
    /// Tries the local Ollama endpoint first and falls back to a
    /// deterministic template when it is unavailable.
    Report(ReportArgs),

    /// 💾 Serialize the working record set to CSV or JSON.
    Export(ExportArgs),
}

/// Filter flags shared by every command.
///
/// Each supplied flag becomes one reversible filter application on the
/// session, in the order listed here.
#[derive(Debug, Args, Default)]
pub struct FilterArgs {
    /// Keep only records of this product.
    #[arg(long)]
    pub product: Option<String>,

    /// Keep only records shipped to this destination.
    #[arg(long)]
    pub destination: Option<String>,

    /// Keep only records dated on or after this day (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<String>,

    /// Keep only records dated on or before this day (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for the `stats` command.
#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Chart series selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartSeries {
    /// Revenue by product as a horizontal bar chart.
    BarRevenue,
    /// Average price by calendar month as a line chart.
    LineMonthlyPrice,
}

/// Arguments for the `chart` command.
#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Series to render.
    #[arg(value_enum)]
    pub series: ChartSeries,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Forecast model selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelChoice {
    /// Trend-adjusted moving average.
    Baseline,
    /// Baseline plus bounded perturbation and confidence bonus.
    Enhanced,
}

/// Arguments for the `predict` command.
#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Product to forecast (e.g. olive-oil, dates).
    #[arg(long)]
    pub product: String,

    /// Destination country for the query.
    #[arg(long)]
    pub destination: String,

    /// Day to forecast for (YYYY-MM-DD).
    #[arg(long)]
    pub target_date: String,

    /// Forecast model.
    #[arg(long, value_enum, default_value_t = ModelChoice::Baseline)]
    pub model: ModelChoice,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the `report` command.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Write the report to this file as well as stdout.
    #[arg(long)]
    pub save: Option<String>,

    /// Skip the LLM endpoint and use the template backend directly.
    #[arg(long, default_value_t = false)]
    pub template_only: bool,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Arguments for the `export` command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Serialization format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub export_format: ExportFormat,

    /// Output file path.
    #[arg(long)]
    pub output: String,

    #[command(flatten)]
    pub filters: FilterArgs,
}
