//! Application shell: context providers and routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the shared state signals (`PredictState`, `ToastsState`) that
//! pages and components resolve via `expect_context`, and mounts the toast
//! tray outside the routed area so notifications survive navigation.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::toast_tray::ToastTray;
use crate::pages::admin::AdminPage;
use crate::state::predict::PredictState;
use crate::state::toasts::ToastsState;

/// Root component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(PredictState::default()));
    provide_context(RwSignal::new(ToastsState::default()));

    view! {
        <Title text="Leakwatch Admin"/>
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="app__not-found">"Not found"</p> }>
                    <Route path=path!("/") view=AdminPage/>
                </Routes>
            </main>
        </Router>
        <ToastTray/>
    }
}
