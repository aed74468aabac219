//! Dark mode preference handling.
//!
//! The preference lives in `localStorage`; rendering happens through a
//! `data-theme` attribute on `<html>` that the stylesheet keys off.
//! Visitors without a stored preference inherit the operating system's
//! color scheme. All of it is browser-only; SSR paths no-op so server
//! rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "eventra_dark";

/// Stored preference, if the visitor ever toggled the theme.
#[cfg(feature = "hydrate")]
fn stored_preference() -> Option<bool> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
    Some(raw == "true")
}

/// Operating system color-scheme preference.
#[cfg(feature = "hydrate")]
fn system_preference() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Effective dark mode preference at startup: the stored choice when one
/// exists, the system scheme otherwise.
#[must_use]
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        stored_preference().unwrap_or_else(system_preference)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set the `data-theme` attribute on `<html>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, persist the choice, and return the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
