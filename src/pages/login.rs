//! Login page: credentials in, bearer token out.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::toast_tray::show_toast;
use crate::net::api::ApiError;
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::session::{Session, SessionStore};

/// Require both credential fields. The email is trimmed; the password is
/// passed through untouched since surrounding whitespace may be real.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// User-facing text for a failed login. The backend's own message wins
/// when it sent one; bare status codes collapse to a friendly default.
fn login_failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Http { message, .. } if !message.starts_with("HTTP status") => message.clone(),
        ApiError::Http { .. } => "Invalid email or password.".to_owned(),
        other => other.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<StoredValue<SessionStore>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    show_toast(notify, ToastKind::Error, message);
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(token) => {
                        let next = store.with_value(|s| s.login(token));
                        session.set(next);
                        show_toast(notify, ToastKind::Success, "Logged in successfully!");
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        show_toast(
                            notify,
                            ToastKind::Error,
                            format!("Login Error: {}", login_failure_text(&err)),
                        );
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, session, store);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="auth-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/register">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
