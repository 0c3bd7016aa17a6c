//! State backing the predict-and-report admin panel.
//!
//! DESIGN
//! ======
//! Both request cycles (predict upload, sample report) carry an in-flight
//! flag that gates their control; a successful predict replaces the row set
//! wholesale rather than merging.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use crate::net::types::{PredictResponse, PredictSummary, PredictionRow};

/// Transient panel state, held only while the panel is mounted.
#[derive(Clone, Debug, Default)]
pub struct PredictState {
    /// Name of the currently selected CSV file, if any.
    pub file_name: Option<String>,
    /// True while a predict upload is in flight.
    pub loading: bool,
    /// True while a sample report send is in flight.
    pub report_pending: bool,
    /// Latest prediction rows, in server order.
    pub predictions: Vec<PredictionRow>,
    /// Aggregate recap from the latest predict, when the backend sent one.
    pub summary: Option<PredictSummary>,
}

impl PredictState {
    /// Whether the predict submit control should accept a click.
    pub fn can_submit(&self) -> bool {
        !self.loading && self.file_name.is_some()
    }

    /// Store a successful predict outcome.
    pub fn apply_response(&mut self, response: PredictResponse) {
        self.predictions = response.predictions;
        self.summary = response.summary;
    }
}
