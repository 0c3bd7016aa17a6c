//! Dynamic results table for prediction rows.
//!
//! The backend does not commit to a column set, so headers come from the key
//! set of the first row and every row renders against those headers
//! best-effort: a missing key becomes an empty cell rather than an error.

#[cfg(test)]
#[path = "prediction_table_test.rs"]
mod prediction_table_test;

use leptos::prelude::*;

use crate::net::types::{PredictSummary, PredictionRow};
use crate::state::predict::PredictState;

/// Placeholder shown before the first successful predict.
pub const EMPTY_PLACEHOLDER: &str = "No predictions yet";

/// Column headers: the first row's keys in server insertion order.
fn table_headers(rows: &[PredictionRow]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// Display text for one cell value.
///
/// Strings render unquoted, other scalars via their JSON text, and nested
/// arrays/objects as serialized JSON.
fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One row of display cells aligned to `headers`.
fn row_cells(headers: &[String], row: &PredictionRow) -> Vec<String> {
    headers
        .iter()
        .map(|key| row.get(key).map(cell_text).unwrap_or_default())
        .collect()
}

/// Recap line for the backend's aggregate summary.
fn summary_line(summary: &PredictSummary) -> String {
    format!(
        "{} records, {} leaks detected ({})",
        summary.total_records, summary.leaks_detected, summary.leak_percentage
    )
}

/// Table of prediction rows, or a placeholder when none are loaded.
#[component]
pub fn PredictionTable() -> impl IntoView {
    let predict = expect_context::<RwSignal<PredictState>>();

    view! {
        <div class="prediction-table">
            <h3 class="prediction-table__title">"Predictions"</h3>
            <Show when=move || predict.get().summary.is_some()>
                <p class="prediction-table__summary">
                    {move || predict.get().summary.map(|s| summary_line(&s)).unwrap_or_default()}
                </p>
            </Show>
            <Show
                when=move || !predict.get().predictions.is_empty()
                fallback=|| view! { <p class="prediction-table__empty">{EMPTY_PLACEHOLDER}</p> }
            >
                <table class="prediction-table__grid">
                    <thead>
                        <tr>
                            {move || {
                                table_headers(&predict.get().predictions)
                                    .into_iter()
                                    .map(|header| view! { <th>{header}</th> })
                                    .collect::<Vec<_>>()
                            }}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = predict.get();
                            let headers = table_headers(&state.predictions);
                            state
                                .predictions
                                .iter()
                                .map(|row| {
                                    let cells = row_cells(&headers, row);
                                    view! {
                                        <tr>
                                            {cells
                                                .into_iter()
                                                .map(|cell| view! { <td>{cell}</td> })
                                                .collect::<Vec<_>>()}
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
