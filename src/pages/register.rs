//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::toast_tray::show_toast;
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::session::{ROLE_ATTENDEE, ROLE_CREATOR};

/// Trim and require both credential fields. Password strength is the
/// backend's call; its validation errors come back in the response.
fn validate_signup(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(ROLE_ATTENDEE.to_owned());
    let password_focused = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_signup(&email.get(), &password.get()) {
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
            let role_value = role.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::register_account(&email_value, &password_value, &role_value)
                    .await
                {
                    Ok(()) => {
                        show_toast(
                            notify,
                            ToastKind::Success,
                            "Registration successful! Please log in.",
                        );
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        show_toast(notify, ToastKind::Error, format!("Registration Error: {err}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label for="register-email">"Email"</label>
                    <input
                        id="register-email"
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="register-password">"Password"</label>
                    <input
                        id="register-password"
                        class="auth-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:focus=move |_| password_focused.set(true)
                        on:blur=move |_| password_focused.set(false)
                    />
                    <Show when=move || password_focused.get()>
                        <div class="password-rules">
                            <p>"Password must contain:"</p>
                            <ul>
                                <li>"At least 6 characters"</li>
                                <li>"At least one uppercase letter (A-Z)"</li>
                                <li>"At least one lowercase letter (a-z)"</li>
                                <li>"At least one number (0-9)"</li>
                                <li>"At least one special character (e.g., !@#$%^&*)"</li>
                            </ul>
                        </div>
                    </Show>
                    <label for="register-role">"I am a:"</label>
                    <select
                        id="register-role"
                        class="auth-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value=ROLE_ATTENDEE>"Normal User (Attendee)"</option>
                        <option value=ROLE_CREATOR>"Event Creator"</option>
                    </select>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
