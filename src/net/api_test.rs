use super::*;

#[test]
fn failure_message_uses_server_error_field_verbatim() {
    assert_eq!(
        failure_message(Some(r#"{"error":"bad csv"}"#), PREDICT_FALLBACK_ERROR),
        "bad csv"
    );
}

#[test]
fn failure_message_falls_back_without_error_field() {
    assert_eq!(
        failure_message(Some(r#"{"detail":"column mismatch"}"#), PREDICT_FALLBACK_ERROR),
        "Prediction failed"
    );
}

#[test]
fn failure_message_falls_back_on_non_json_body() {
    assert_eq!(
        failure_message(Some("<html>502 Bad Gateway</html>"), REPORT_FALLBACK_ERROR),
        "Report failed"
    );
}

#[test]
fn failure_message_falls_back_on_null_error() {
    assert_eq!(failure_message(Some(r#"{"error":null}"#), REPORT_FALLBACK_ERROR), "Report failed");
}

#[test]
fn transport_failure_has_no_body_and_uses_predict_fallback() {
    assert_eq!(failure_message(None, PREDICT_FALLBACK_ERROR), "Prediction failed");
}

#[test]
fn transport_failure_has_no_body_and_uses_report_fallback() {
    assert_eq!(failure_message(None, REPORT_FALLBACK_ERROR), "Report failed");
}

#[test]
fn report_ack_message_prefers_server_message() {
    let ack = ReportAck {
        message: Some("1 leaks reported successfully".to_owned()),
    };
    assert_eq!(report_ack_message(&ack), "1 leaks reported successfully");
}

#[test]
fn report_ack_message_falls_back_when_missing() {
    assert_eq!(report_ack_message(&ReportAck::default()), "Report sent");
}
