//! REST API helpers for the prediction backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. The async entry
//! points exist only under `hydrate` because a multipart upload is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with a ready-to-display message so the
//! panel can toast failures without inspecting response internals. Both
//! endpoints reply with `{ "error": "..." }` on failure; that string is used
//! verbatim when present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::{LeakReport, PredictResponse};
use super::types::ReportAck;

#[cfg(feature = "hydrate")]
const PREDICT_ENDPOINT: &str = "/predict";
#[cfg(feature = "hydrate")]
const REPORT_ENDPOINT: &str = "/report_leak";

/// Generic message when a predict failure carries no server error.
pub const PREDICT_FALLBACK_ERROR: &str = "Prediction failed";
/// Generic message when a report failure carries no server error.
pub const REPORT_FALLBACK_ERROR: &str = "Report failed";
/// Generic message when a report acknowledgement carries no server message.
pub const REPORT_FALLBACK_OK: &str = "Report sent";

/// Picks the user-facing message for a failed request.
///
/// `body` is the error-response text when the server replied at all; a
/// transport failure has no body to inspect. The server's `error` field is
/// used verbatim when present; anything else (no body, missing field,
/// non-JSON body) falls back to the generic message.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(body: Option<&str>, fallback: &str) -> String {
    body.and_then(|b| serde_json::from_str::<super::types::ApiErrorBody>(b).ok())
        .and_then(|b| b.error)
        .unwrap_or_else(|| fallback.to_owned())
}

/// Maps a predict transport or parse failure to the generic message, keeping
/// the underlying detail in the console log.
#[cfg(feature = "hydrate")]
fn predict_transport_failure(err: &gloo_net::Error) -> String {
    log::error!("predict transport failure: {err}");
    failure_message(None, PREDICT_FALLBACK_ERROR)
}

/// User-facing message for a report acknowledgement.
pub fn report_ack_message(ack: &ReportAck) -> String {
    ack.message
        .clone()
        .unwrap_or_else(|| REPORT_FALLBACK_OK.to_owned())
}

/// Upload a CSV file to `POST /predict` and parse the prediction rows.
///
/// The file goes into a multipart form under field name `file`; the browser
/// picks the boundary, so no content type is set here.
///
/// # Errors
///
/// Returns a display-ready message when the upload fails, the server replies
/// non-OK, or the response body does not parse. Only a server-provided
/// `error` field reaches the user verbatim; transport and parse failures
/// surface the generic fallback.
#[cfg(feature = "hydrate")]
pub async fn post_predict(file: &web_sys::File) -> Result<PredictResponse, String> {
    let form = web_sys::FormData::new().map_err(|_| PREDICT_FALLBACK_ERROR.to_owned())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| PREDICT_FALLBACK_ERROR.to_owned())?;
    let resp = gloo_net::http::Request::post(PREDICT_ENDPOINT)
        .body(form)
        .map_err(|e| predict_transport_failure(&e))?
        .send()
        .await
        .map_err(|e| predict_transport_failure(&e))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(failure_message(Some(&body), PREDICT_FALLBACK_ERROR));
    }
    resp.json::<PredictResponse>()
        .await
        .map_err(|e| predict_transport_failure(&e))
}

/// Send a leak report to `POST /report_leak`.
///
/// # Errors
///
/// Returns a display-ready message when the request fails, the server replies
/// non-OK, or the acknowledgement body does not parse. Transport and parse
/// failures surface the generic fallback.
#[cfg(feature = "hydrate")]
pub async fn post_report(report: &LeakReport) -> Result<ReportAck, String> {
    let resp = gloo_net::http::Request::post(REPORT_ENDPOINT)
        .json(report)
        .map_err(|_| failure_message(None, REPORT_FALLBACK_ERROR))?
        .send()
        .await
        .map_err(|_| failure_message(None, REPORT_FALLBACK_ERROR))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(failure_message(Some(&body), REPORT_FALLBACK_ERROR));
    }
    resp.json::<ReportAck>()
        .await
        .map_err(|_| failure_message(None, REPORT_FALLBACK_ERROR))
}
