//! Standalone page for the caller's registrations, linked from the
//! navbar. The list itself lives in `components::registrations_list`
//! and is shared with the attendee home view.

use leptos::prelude::*;

use crate::components::registrations_list::RegistrationsList;

#[component]
pub fn MyRegistrationsPage() -> impl IntoView {
    view! {
        <main class="registrations-page">
            <header class="detail__header">
                <h1>"My Registrations"</h1>
                <p class="detail__subtitle">"Your personal event pass collection."</p>
            </header>
            <RegistrationsList/>
        </main>
    }
}
