//! Chrome-level UI state independent of domain data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI preferences shared via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mirrors the `data-theme` attribute managed by `util::dark_mode`.
    pub dark_mode: bool,
}
