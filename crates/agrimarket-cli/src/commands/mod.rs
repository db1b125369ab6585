mod chart;
mod export;
mod predict;
mod report;
mod stats;

use std::fs;

use agrimarket_core::{DashboardSession, ExportDate, ExportRecord, Product};
use serde_json::Value;

use crate::cli::{Cli, Command, FilterArgs};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    /// Preformatted terminal block (charts, reports) shown in table mode.
    pub text: Option<String>,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            text: None,
            warnings: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let records = load_records(cli)?;

    match &cli.command {
        Command::Stats(args) => {
            let session = build_session(records, &args.filters)?;
            stats::run(&session)
        }
        Command::Chart(args) => {
            let session = build_session(records, &args.filters)?;
            chart::run(args, &session)
        }
        Command::Predict(args) => {
            let mut session = build_session(records, &args.filters)?;
            predict::run(args, &mut session)
        }
        Command::Report(args) => {
            let mut session = build_session(records, &args.filters)?;
            report::run(args, &mut session).await
        }
        Command::Export(args) => {
            let session = build_session(records, &args.filters)?;
            export::run(args, &session)
        }
    }
}

fn load_records(cli: &Cli) -> Result<Vec<ExportRecord>, CliError> {
    match &cli.data {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let records: Vec<ExportRecord> = serde_json::from_str(&text)?;
            Ok(records)
        }
        None => agrimarket_core::generate_sample_records().map_err(CliError::from),
    }
}

/// Open a session and apply each supplied filter flag as a reversible
/// filter, in flag order.
fn build_session(
    records: Vec<ExportRecord>,
    filters: &FilterArgs,
) -> Result<DashboardSession, CliError> {
    let mut session = DashboardSession::new(records);

    if let Some(value) = &filters.product {
        let product: Product = value.parse()?;
        session.apply_filter(format!("product = {product}"), move |r| {
            r.product == product
        });
    }
    if let Some(value) = &filters.destination {
        let destination = value.clone();
        session.apply_filter(format!("destination = {destination}"), move |r| {
            r.destination == destination
        });
    }
    if let Some(value) = &filters.from {
        let from = ExportDate::parse(value)?;
        session.apply_filter(format!("date >= {from}"), move |r| r.date >= from);
    }
    if let Some(value) = &filters.to {
        let to = ExportDate::parse(value)?;
        session.apply_filter(format!("date <= {to}"), move |r| r.date <= to);
    }

    Ok(session)
}
