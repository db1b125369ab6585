//! Record storage boundary, consumed at session start.

use crate::ExportRecord;

/// Data access contract for export records.
pub trait ExportRecordRepository {
    fn find_all(&self) -> Vec<ExportRecord>;

    fn save_all(&mut self, records: Vec<ExportRecord>);

    fn find_latest(&self) -> Option<ExportRecord>;
}

/// In-memory repository for demos and tests.
#[derive(Debug, Default)]
pub struct InMemoryExportRecordRepository {
    storage: Vec<ExportRecord>,
}

impl InMemoryExportRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExportRecordRepository for InMemoryExportRecordRepository {
    fn find_all(&self) -> Vec<ExportRecord> {
        self.storage.clone()
    }

    fn save_all(&mut self, records: Vec<ExportRecord>) {
        self.storage = records;
        self.storage.sort_by_key(|r| r.date);
    }

    fn find_latest(&self) -> Option<ExportRecord> {
        self.storage.iter().max_by_key(|r| r.date).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExportDate, Product};
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn record(date: &str) -> ExportRecord {
        ExportRecord::new(
            ExportDate::parse(date).expect("date"),
            Product::Dates,
            "Germany",
            5.0,
            dec!(3000.00),
            BTreeMap::new(),
        )
        .expect("record")
    }

    #[test]
    fn save_all_sorts_by_date_ascending() {
        let mut repo = InMemoryExportRecordRepository::new();
        repo.save_all(vec![record("2025-03-01"), record("2025-01-01")]);

        let dates: Vec<String> = repo.find_all().iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-01-01", "2025-03-01"]);
    }

    #[test]
    fn find_latest_returns_most_recent_record() {
        let mut repo = InMemoryExportRecordRepository::new();
        repo.save_all(vec![record("2025-03-01"), record("2025-01-01")]);

        let latest = repo.find_latest().expect("must exist");
        assert_eq!(latest.date.to_string(), "2025-03-01");
    }
}
