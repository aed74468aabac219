//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic: token decoding and persistence, routing decisions,
//! theming, downloads, and display formatting.

pub mod auth;
pub mod claims;
pub mod dark_mode;
pub mod download;
pub mod format;
pub mod token_storage;
