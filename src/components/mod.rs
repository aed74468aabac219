//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers. Route-scoped
//! orchestration stays in `pages`.

pub mod event_form;
pub mod event_list;
pub mod guards;
pub mod navbar;
pub mod registrations_list;
pub mod toast_tray;
