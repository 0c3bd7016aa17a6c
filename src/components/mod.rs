//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin panel surfaces while reading/writing shared
//! state from Leptos context providers.

pub mod predict_report_panel;
pub mod prediction_table;
pub mod toast_tray;
