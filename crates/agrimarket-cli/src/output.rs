use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let envelope = json!({
                "data": result.data,
                "text": result.text,
                "warnings": result.warnings,
            });
            let payload = if pretty {
                serde_json::to_string_pretty(&envelope)?
            } else {
                serde_json::to_string(&envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => {
            if let Some(text) = &result.text {
                println!("{text}");
            } else {
                let pretty_data = serde_json::to_string_pretty(&result.data)?;
                for line in pretty_data.lines() {
                    println!("  {line}");
                }
            }
        }
    }

    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    Ok(())
}
