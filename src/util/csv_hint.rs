//! Documented CSV schema for the predict upload.
//!
//! The backend maps columns flexibly and validates them server-side; the
//! client only surfaces the expected names next to the file picker and never
//! rejects an upload over its header line.

#[cfg(test)]
#[path = "csv_hint_test.rs"]
mod csv_hint_test;

/// Column names the prediction model expects.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "water_supplied_litres",
    "water_consumed_litres",
    "flowrate_lps",
    "pressure_psi",
];

/// Example CSV block shown under the file picker.
pub const EXAMPLE_CSV: &str = "water_supplied_litres,water_consumed_litres,flowrate_lps,pressure_psi\n1000,950,2.5,45\n1200,1150,2.8,42";

/// Comma-joined column list for the hint text.
pub fn required_columns_line() -> String {
    REQUIRED_COLUMNS.join(", ")
}
