//! Toast rendering and dismissal scheduling.
//!
//! DESIGN
//! ======
//! `show_toast` is the one entry point pages use to notify the user; it
//! queues the toast and, in the browser, schedules auto-dismissal. The
//! tray itself is a fixed overlay mounted once at the app root.

#[cfg(test)]
#[path = "toast_tray_test.rs"]
mod toast_tray_test;

use leptos::prelude::*;

use crate::state::notify::{NotifyState, Toast, ToastKind};

/// How long a toast stays on screen.
#[cfg(feature = "hydrate")]
const TOAST_MS: u64 = 4_000;

/// Queue a toast on `notify` and schedule its removal.
pub fn show_toast(notify: RwSignal<NotifyState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let mut id = String::new();
    notify.update(|state| id = state.push(kind, message));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_MS)).await;
            notify.update(|state| state.dismiss(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed overlay rendering the toast queue.
#[component]
pub fn ToastTray() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toast-tray">
            {move || {
                notify
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| view! { <ToastCard toast=toast/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let id = toast.id.clone();

    view! {
        <div class=format!("toast {}", toast_kind_class(toast.kind))>
            <span class="toast__message">{toast.message.clone()}</span>
            <button
                class="toast__dismiss"
                aria-label="Dismiss"
                on:click=move |_| notify.update(|state| state.dismiss(&id))
            >
                "\u{2715}"
            </button>
        </div>
    }
}

fn toast_kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast--success",
        ToastKind::Error => "toast--error",
        ToastKind::Info => "toast--info",
    }
}
