//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, redirects,
//! toasts) and delegates rendering details to `components`.

pub mod event_detail;
pub mod event_management;
pub mod home;
pub mod login;
pub mod my_registrations;
pub mod register;
