use std::fs;

use agrimarket_core::{DashboardSession, ReportGenerator, TemplateReportGenerator};
use serde_json::json;

use crate::cli::ReportArgs;
use crate::error::CliError;
use crate::report_llm::OllamaReportGenerator;

use super::CommandResult;

pub async fn run(
    args: &ReportArgs,
    session: &mut DashboardSession,
) -> Result<CommandResult, CliError> {
    let statistics = session.statistics();
    let records = session.analysis_records();
    let predictions = session.predictions();

    let (report, used_fallback) = if args.template_only {
        let text = TemplateReportGenerator.generate_report(records, predictions, &statistics)?;
        (text, false)
    } else {
        let outcome = OllamaReportGenerator::default()
            .generate(records, predictions, &statistics)
            .await?;
        (outcome.text, outcome.used_fallback)
    };

    if let Some(path) = &args.save {
        fs::write(path, &report)?;
        eprintln!("✓ Report saved to {path}");
    }

    let mut result = CommandResult::ok(json!({
        "chars": report.len(),
        "saved_to": args.save,
    }))
    .with_text(report);

    if used_fallback {
        result = result.with_warning("LLM endpoint unavailable; template report generated");
    }
    Ok(result)
}
