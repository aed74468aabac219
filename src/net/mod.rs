//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles authenticated HTTP calls and `types` defines the shared
//! wire schema. There is no client-side retry or caching; pages own the
//! lifecycle of every request they start.

pub mod api;
pub mod types;
