//! Toast overlay rendering the shared notification queue.
//!
//! Toasts expire on their own (see `state::toasts::notify`); clicking one
//! dismisses it early.

#[cfg(test)]
#[path = "toast_tray_test.rs"]
mod toast_tray_test;

use leptos::prelude::*;

use crate::state::toasts::{ToastLevel, ToastsState};

/// CSS modifier for a toast level.
fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "success",
        ToastLevel::Error => "error",
    }
}

/// Fixed overlay listing active toasts, oldest on top.
#[component]
pub fn ToastTray() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    view! {
        <div class="toast-tray">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        view! {
                            <div
                                class=format!("toast toast--{}", level_class(toast.level))
                                on:click=move |_| toasts.update(|t| t.dismiss(&id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
