//! Serialize the working record set to a file.

use std::fs;

use agrimarket_core::{records_to_csv, records_to_json, DashboardSession};
use serde_json::json;

use crate::cli::{ExportArgs, ExportFormat};
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &ExportArgs, session: &DashboardSession) -> Result<CommandResult, CliError> {
    let records = session.analysis_records();

    let payload = match args.export_format {
        ExportFormat::Csv => records_to_csv(records),
        ExportFormat::Json => records_to_json(records)?,
    };
    fs::write(&args.output, &payload)?;

    eprintln!("✓ Exported {} records to {}", records.len(), args.output);

    Ok(CommandResult::ok(json!({
        "format": match args.export_format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        },
        "output": args.output,
        "records_exported": records.len(),
        "exported": true,
    })))
}
