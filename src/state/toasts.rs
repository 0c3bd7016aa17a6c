//! Transient toast-notification queue shared via context.
//!
//! DESIGN
//! ======
//! Every predict/report outcome surfaces as a toast. The queue lives in one
//! context signal so any component can push feedback; `notify` also schedules
//! auto-dismissal so callers never manage timers themselves.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_TTL_MS: u64 = 4000;

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Success,
    Error,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Identity used for dismissal and render keys.
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
}

/// Shared toast queue, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastsState {
    pub items: Vec<Toast>,
}

impl ToastsState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Toast {
            id: id.clone(),
            level,
            message: message.into(),
        });
        id
    }

    /// Drop the toast with the given id; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}

/// Push a toast and schedule its auto-dismissal after [`TOAST_TTL_MS`].
pub fn notify(toasts: RwSignal<ToastsState>, level: ToastLevel, message: impl Into<String>) {
    let message = message.into();
    let mut id = String::new();
    toasts.update(|t| id = t.push(level, message));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
        toasts.update(|t| t.dismiss(&id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
