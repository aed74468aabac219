#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_without_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_and_returns_the_new_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(true);
    apply(false);
}
