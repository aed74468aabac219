use super::*;

#[test]
fn default_theme_is_light() {
    assert!(!UiState::default().dark_mode);
}
