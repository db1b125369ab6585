//! Mechanical serialization of record sets for file export.

use std::fmt::Write as _;

use crate::{CoreError, ExportRecord};

/// CSV rendering with fixed field order: date, product, destination,
/// volume (2-decimal fixed point), price.
pub fn records_to_csv(records: &[ExportRecord]) -> String {
    let mut out = String::from("date,product,destination,volume_tons,price_per_ton\n");
    for record in records {
        let _ = writeln!(
            out,
            "{},{},{},{:.2},{}",
            record.date,
            record.product,
            escape_csv(&record.destination),
            record.volume_tons,
            record.price_per_ton,
        );
    }
    out
}

/// Pretty-printed JSON array of records.
pub fn records_to_json(records: &[ExportRecord]) -> Result<String, CoreError> {
    serde_json::to_string_pretty(records).map_err(CoreError::from)
}

fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
