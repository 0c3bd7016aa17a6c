//! Current-time access for report timestamps.
//!
//! Browser builds read the wall clock through `js_sys::Date`; other builds
//! have no clock wired up and return the Unix epoch so output stays
//! deterministic.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time as an ISO-8601 string, e.g. `2026-08-30T12:00:00.000Z`.
pub fn now_iso8601() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0()
            .to_iso_string()
            .as_string()
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01-01T00:00:00.000Z".to_owned()
    }
}
