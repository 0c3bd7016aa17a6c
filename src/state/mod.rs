//! Context-provided state modules.
//!
//! DESIGN
//! ======
//! Each state struct is provided as a single `RwSignal` from the app shell so
//! components can read and write shared state without prop plumbing. All of it
//! is transient: nothing here persists past a remount.

pub mod predict;
pub mod toasts;
