//! Admin widget driving the CSV predict upload and the sample leak report.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two independent request cycles against the backend: a multipart CSV upload
//! to `/predict` whose rows feed the results table, and a canned JSON payload
//! to `/report_leak`. Each cycle runs idle -> in-flight -> toast and always
//! returns to idle. In-flight requests are bound to the panel's lifetime: a
//! response that lands after unmount is discarded without touching state.

#[cfg(test)]
#[path = "predict_report_panel_test.rs"]
mod predict_report_panel_test;

use leptos::prelude::*;

use crate::components::prediction_table::PredictionTable;
use crate::net::types::{LeakEntry, LeakReport};
use crate::state::predict::PredictState;
use crate::state::toasts::{self, ToastLevel, ToastsState};
use crate::util::csv_hint;

/// Toast shown when predict is submitted without a file.
const NO_FILE_MESSAGE: &str = "Select a CSV file to predict";

/// Zone used for the canned sample report.
const SAMPLE_ZONE_ID: &str = "Z-1";
const SAMPLE_DESCRIPTION: &str = "Sample leak";

/// Builds the canned single-leak report sent by the quick-report button.
fn sample_leak_report(timestamp: String) -> LeakReport {
    LeakReport {
        leaks: vec![LeakEntry {
            zone_id: SAMPLE_ZONE_ID.to_owned(),
            timestamp,
            description: SAMPLE_DESCRIPTION.to_owned(),
        }],
    }
}

/// Label for the predict submit control.
fn predict_button_label(loading: bool) -> &'static str {
    if loading { "Predicting..." } else { "Run Prediction" }
}

/// Pre-flight check for a predict submit; `Some` carries the toast message
/// when the submit must be blocked without a network call.
fn submit_guard_message(state: &PredictState) -> Option<&'static str> {
    if state.file_name.is_none() {
        Some(NO_FILE_MESSAGE)
    } else {
        None
    }
}

/// Predict-and-report admin panel.
///
/// Reads `PredictState` and `ToastsState` from context; both must be provided
/// by the app shell.
#[component]
pub fn PredictReportPanel() -> impl IntoView {
    let predict = expect_context::<RwSignal<PredictState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let file_input = NodeRef::<leptos::html::Input>::new();

    // Cleared on unmount so late responses cannot mutate state.
    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(feature = "hydrate")]
    let predict_alive = alive.clone();
    #[cfg(feature = "hydrate")]
    let report_alive = alive.clone();

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let name = file_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            predict.update(|s| s.file_name = name);
        }
    };

    let on_predict = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if predict.get().loading {
            return;
        }
        if let Some(message) = submit_guard_message(&predict.get()) {
            toasts::notify(toasts, ToastLevel::Error, message);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                toasts::notify(toasts, ToastLevel::Error, NO_FILE_MESSAGE);
                return;
            };
            predict.update(|s| s.loading = true);
            let alive = predict_alive.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::post_predict(&file).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match outcome {
                    Ok(response) => {
                        predict.update(|s| s.apply_response(response));
                        toasts::notify(toasts, ToastLevel::Success, "Prediction completed");
                    }
                    Err(message) => {
                        log::error!("predict failed: {message}");
                        toasts::notify(toasts, ToastLevel::Error, message);
                    }
                }
                predict.update(|s| s.loading = false);
            });
        }
    };

    let on_report = move |_| {
        if predict.get().report_pending {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            predict.update(|s| s.report_pending = true);
            let report = sample_leak_report(crate::util::clock::now_iso8601());
            let alive = report_alive.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::post_report(&report).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match outcome {
                    Ok(ack) => toasts::notify(
                        toasts,
                        ToastLevel::Success,
                        crate::net::api::report_ack_message(&ack),
                    ),
                    Err(message) => toasts::notify(toasts, ToastLevel::Error, message),
                }
                predict.update(|s| s.report_pending = false);
            });
        }
    };

    view! {
        <section class="predict-panel">
            <header class="predict-panel__header">
                <h2>"Predict from CSV"</h2>
                <p class="predict-panel__subtitle">
                    "Upload a CSV to run leak predictions using the server model"
                </p>
            </header>

            <form class="predict-panel__form" on:submit=on_predict>
                <label class="predict-panel__label" for="predict-file">
                    "CSV File"
                </label>
                <input
                    id="predict-file"
                    class="predict-panel__file"
                    type="file"
                    accept=".csv"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <p class="predict-panel__hint">
                    "Required columns: "
                    {csv_hint::required_columns_line()}
                </p>
                <div class="predict-panel__example">
                    <p class="predict-panel__example-title">"Example CSV format:"</p>
                    <pre>{csv_hint::EXAMPLE_CSV}</pre>
                </div>
                <button
                    class="btn btn--primary predict-panel__submit"
                    type="submit"
                    disabled=move || !predict.get().can_submit()
                >
                    {move || predict_button_label(predict.get().loading)}
                </button>
            </form>

            <PredictionTable/>

            <div class="predict-panel__report">
                <h3>"Quick Report"</h3>
                <p class="predict-panel__hint">
                    "Send a sample leak report to the backend (uses /report_leak)"
                </p>
                <button
                    class="btn predict-panel__report-send"
                    on:click=on_report
                    disabled=move || predict.get().report_pending
                >
                    "Send Sample Report"
                </button>
            </div>
        </section>
    }
}
