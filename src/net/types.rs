//! Wire DTOs for the prediction backend REST boundary.
//!
//! DESIGN
//! ======
//! `/predict` does not commit to a column set, so prediction rows stay an
//! ordered JSON map instead of a fixed struct. Treat this as a temporary
//! adapter over an untyped payload; once the backend pins its schema these
//! should become typed records.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One prediction row: column name -> value, in server insertion order.
pub type PredictionRow = serde_json::Map<String, serde_json::Value>;

/// Body of a successful `POST /predict` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PredictResponse {
    /// Model output rows; an absent field means an empty result set.
    #[serde(default)]
    pub predictions: Vec<PredictionRow>,
    /// Aggregate recap the backend attaches alongside the rows, when present.
    #[serde(default)]
    pub summary: Option<PredictSummary>,
}

/// Aggregate statistics computed by the backend for one predict call.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictSummary {
    pub total_records: u64,
    pub leaks_detected: u64,
    /// Preformatted percentage string, e.g. `"12.5%"`.
    pub leak_percentage: String,
}

/// Error body shared by both endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of a `POST /report_leak` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ReportAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload for `POST /report_leak`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeakReport {
    pub leaks: Vec<LeakEntry>,
}

/// A single reported leak.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeakEntry {
    pub zone_id: String,
    /// ISO-8601 timestamp of when the leak was observed.
    pub timestamp: String,
    pub description: String,
}
