//! Admin route hosting the predict-and-report panel.

use leptos::prelude::*;

use crate::components::predict_report_panel::PredictReportPanel;

/// Admin page. Route-level orchestration is trivial here since the panel
/// owns both request cycles.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <PredictReportPanel/>
        </div>
    }
}
