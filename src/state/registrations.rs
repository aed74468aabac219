//! The caller's own registration list.

#[cfg(test)]
#[path = "registrations_test.rs"]
mod registrations_test;

use crate::net::types::Registration;

/// Shared state behind the registrations panel and page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationsState {
    pub items: Vec<Registration>,
    pub loading: bool,
}

impl RegistrationsState {
    /// Whether the panel should show its empty placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}
