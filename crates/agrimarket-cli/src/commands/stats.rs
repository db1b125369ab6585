use std::fmt::Write as _;

use agrimarket_core::DashboardSession;

use crate::error::CliError;

use super::CommandResult;

pub fn run(session: &DashboardSession) -> Result<CommandResult, CliError> {
    let snapshot = session.statistics();

    let mut text = String::from("=== STATISTICS ===\n");
    for (name, value) in snapshot.entries() {
        let _ = writeln!(text, "  {name}: {value}");
    }

    let mut result = CommandResult::ok(serde_json::to_value(&snapshot)?).with_text(text);
    if session.working_set().is_empty() && !session.filter_history().is_empty() {
        result = result
            .with_warning("active filters match no records; statistics cover the full record set");
    }
    Ok(result)
}
