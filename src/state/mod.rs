//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `events`, `registrations`,
//! `notify`, `ui`) so individual components can depend on small focused
//! models. Each domain struct lives in an `RwSignal` provided from the
//! root component.

pub mod events;
pub mod notify;
pub mod registrations;
pub mod session;
pub mod ui;
