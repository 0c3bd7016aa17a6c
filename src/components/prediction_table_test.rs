use super::*;

fn rows(body: &str) -> Vec<PredictionRow> {
    serde_json::from_str(body).unwrap()
}

// =============================================================
// table_headers
// =============================================================

#[test]
fn headers_come_from_first_row_in_order() {
    let rows = rows(r#"[{"a":1,"b":2},{"a":3,"b":4}]"#);
    assert_eq!(table_headers(&rows), ["a", "b"]);
}

#[test]
fn headers_empty_without_rows() {
    assert!(table_headers(&[]).is_empty());
}

#[test]
fn headers_ignore_extra_keys_in_later_rows() {
    let rows = rows(r#"[{"a":1},{"a":2,"b":3}]"#);
    assert_eq!(table_headers(&rows), ["a"]);
}

// =============================================================
// cell_text
// =============================================================

#[test]
fn cell_text_renders_strings_unquoted() {
    assert_eq!(cell_text(&serde_json::json!("Sector 1")), "Sector 1");
}

#[test]
fn cell_text_renders_scalars_plainly() {
    assert_eq!(cell_text(&serde_json::json!(2.5)), "2.5");
    assert_eq!(cell_text(&serde_json::json!(true)), "true");
    assert_eq!(cell_text(&serde_json::json!(null)), "null");
}

#[test]
fn cell_text_serializes_nested_values_as_json() {
    assert_eq!(cell_text(&serde_json::json!({"lat": 1, "lon": 2})), r#"{"lat":1,"lon":2}"#);
    assert_eq!(cell_text(&serde_json::json!([1, 2])), "[1,2]");
}

// =============================================================
// row_cells
// =============================================================

#[test]
fn row_cells_align_to_headers() {
    let rows = rows(r#"[{"a":1,"b":2},{"a":3,"b":4}]"#);
    let headers = table_headers(&rows);
    assert_eq!(row_cells(&headers, &rows[0]), ["1", "2"]);
    assert_eq!(row_cells(&headers, &rows[1]), ["3", "4"]);
}

#[test]
fn row_cells_render_missing_keys_empty() {
    let rows = rows(r#"[{"a":1,"b":2},{"a":3}]"#);
    let headers = table_headers(&rows);
    assert_eq!(row_cells(&headers, &rows[1]), ["3", ""]);
}

// =============================================================
// summary_line
// =============================================================

#[test]
fn summary_line_formats_recap() {
    let summary = PredictSummary {
        total_records: 10,
        leaks_detected: 3,
        leak_percentage: "30.0%".to_owned(),
    };
    assert_eq!(summary_line(&summary), "10 records, 3 leaks detected (30.0%)");
}

#[test]
fn placeholder_text_is_stable() {
    assert_eq!(EMPTY_PLACEHOLDER, "No predictions yet");
}
