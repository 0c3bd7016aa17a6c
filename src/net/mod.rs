//! Networking modules for the prediction backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the two REST calls (`/predict`, `/report_leak`) and `types`
//! defines the wire schema shared with the backend.

pub mod api;
pub mod types;
