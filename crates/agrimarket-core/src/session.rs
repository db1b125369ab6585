//! Dashboard session state: working record set, reversible filters, and
//! prediction history.
//!
//! A session is single-owner by contract. All transitions take `&mut self`;
//! embedding hosts must serialize concurrent access per session.

use tracing::{debug, info};

use crate::analytics::{self, StatisticsSnapshot};
use crate::{ExportRecord, PredictionResult};

/// Reversible filter transition holding owned before/after snapshots.
///
/// Owned copies keep the command free of aliasing with the live working set.
#[derive(Debug, Clone)]
pub struct FilterCommand {
    description: String,
    before: Vec<ExportRecord>,
    after: Vec<ExportRecord>,
}

impl FilterCommand {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn before(&self) -> &[ExportRecord] {
        &self.before
    }

    pub fn after(&self) -> &[ExportRecord] {
        &self.after
    }
}

/// Change notifications delivered to session observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    WorkingSetChanged,
    PredictionRecorded,
}

/// Observer of session state changes.
///
/// Notification is synchronous, in registration order.
pub trait SessionObserver {
    fn on_change(&self, event: SessionEvent);
}

impl std::fmt::Debug for DashboardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardSession")
            .field("records", &self.records)
            .field("working", &self.working)
            .field("history", &self.history)
            .field("undone", &self.undone)
            .field("predictions", &self.predictions)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// State machine over a single working set of export records.
pub struct DashboardSession {
    records: Vec<ExportRecord>,
    working: Vec<ExportRecord>,
    history: Vec<FilterCommand>,
    /// One-off record of undone commands; cleared by the next filter. There
    /// is no redo path.
    undone: Vec<FilterCommand>,
    predictions: Vec<PredictionResult>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl DashboardSession {
    pub fn new(records: Vec<ExportRecord>) -> Self {
        let working = records.clone();
        Self {
            records,
            working,
            history: Vec::new(),
            undone: Vec::new(),
            predictions: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Full record set the session was opened with.
    pub fn records(&self) -> &[ExportRecord] {
        &self.records
    }

    /// Current, possibly filtered, working set.
    pub fn working_set(&self) -> &[ExportRecord] {
        &self.working
    }

    /// Records analysis components should operate on.
    ///
    /// An empty filter result is treated as "no filter": the full set is
    /// returned so statistics, forecasts, and charts never see zero records
    /// while data exists.
    pub fn analysis_records(&self) -> &[ExportRecord] {
        if self.working.is_empty() {
            &self.records
        } else {
            &self.working
        }
    }

    /// Narrow the working set, recording a reversible command.
    ///
    /// Clears the undone record: once a new filter commits there is no redo.
    pub fn apply_filter<P>(&mut self, description: impl Into<String>, predicate: P)
    where
        P: Fn(&ExportRecord) -> bool,
    {
        let description = description.into();
        let after = analytics::filter(&self.working, &predicate);
        info!(
            filter = %description,
            before = self.working.len(),
            after = after.len(),
            "filter applied"
        );

        let command = FilterCommand {
            description,
            before: std::mem::replace(&mut self.working, after.clone()),
            after,
        };
        self.history.push(command);
        self.undone.clear();
        self.notify(SessionEvent::WorkingSetChanged);
    }

    /// Reset the working set to the full record set.
    ///
    /// Recorded as a filter application for history consistency, so it is
    /// undoable like any other filter.
    pub fn clear_filters(&mut self) {
        let full = self.records.clone();
        let command = FilterCommand {
            description: String::from("clear filters"),
            before: std::mem::replace(&mut self.working, full.clone()),
            after: full,
        };
        self.history.push(command);
        self.undone.clear();
        self.notify(SessionEvent::WorkingSetChanged);
    }

    /// Restore the working set from the most recent filter command.
    ///
    /// Returns false (no-op) when the history is empty.
    pub fn undo(&mut self) -> bool {
        let Some(command) = self.history.pop() else {
            debug!("undo requested with empty history");
            return false;
        };

        self.working = command.before.clone();
        info!(filter = %command.description, "filter undone");
        self.undone.push(command);
        self.notify(SessionEvent::WorkingSetChanged);
        true
    }

    /// Statistics over the current analysis records.
    pub fn statistics(&self) -> StatisticsSnapshot {
        StatisticsSnapshot::compute(self.analysis_records())
    }

    /// Append a forecast result to the ordered history.
    pub fn record_prediction(&mut self, result: PredictionResult) {
        self.predictions.push(result);
        self.notify(SessionEvent::PredictionRecorded);
    }

    pub fn predictions(&self) -> &[PredictionResult] {
        &self.predictions
    }

    pub fn filter_history(&self) -> &[FilterCommand] {
        &self.history
    }

    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    fn notify(&self, event: SessionEvent) {
        for observer in &self.observers {
            observer.on_change(event);
        }
    }
}
