#![cfg(not(feature = "hydrate"))]
//! Non-hydrate builds must treat the browser token store as a safe no-op.

use super::*;

#[test]
fn load_misses_without_browser_storage() {
    assert_eq!(BrowserTokenStore.load(), None);
}

#[test]
fn save_and_clear_are_noops_without_browser_storage() {
    let store = BrowserTokenStore;
    store.save("anything");
    store.clear();
    assert_eq!(store.load(), None);
}
