use super::*;

// =============================================================
// sample_leak_report
// =============================================================

#[test]
fn sample_report_uses_fixed_zone() {
    let report = sample_leak_report("2026-08-30T12:00:00.000Z".to_owned());
    assert_eq!(report.leaks.len(), 1);
    assert_eq!(report.leaks[0].zone_id, "Z-1");
}

#[test]
fn sample_report_description_is_nonempty() {
    let report = sample_leak_report("2026-08-30T12:00:00.000Z".to_owned());
    assert!(!report.leaks[0].description.is_empty());
}

#[test]
fn sample_report_carries_given_timestamp() {
    let report = sample_leak_report("2026-08-30T12:00:00.000Z".to_owned());
    assert_eq!(report.leaks[0].timestamp, "2026-08-30T12:00:00.000Z");
}

#[test]
fn sample_report_serializes_wire_shape() {
    let report = sample_leak_report("2026-08-30T12:00:00.000Z".to_owned());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "leaks": [{
                "zone_id": "Z-1",
                "timestamp": "2026-08-30T12:00:00.000Z",
                "description": "Sample leak"
            }]
        })
    );
}

// =============================================================
// Labels and messages
// =============================================================

#[test]
fn predict_button_label_reflects_loading() {
    assert_eq!(predict_button_label(false), "Run Prediction");
    assert_eq!(predict_button_label(true), "Predicting...");
}

// =============================================================
// submit_guard_message
// =============================================================

#[test]
fn submit_without_file_yields_guard_message() {
    assert_eq!(
        submit_guard_message(&PredictState::default()),
        Some("Select a CSV file to predict")
    );
}

#[test]
fn submit_with_file_passes_guard() {
    let state = PredictState {
        file_name: Some("zones.csv".to_owned()),
        ..PredictState::default()
    };
    assert_eq!(submit_guard_message(&state), None);
}
