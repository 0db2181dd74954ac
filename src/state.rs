//! Reactive display-mode holder scoped to the root component

use leptos::prelude::*;
use portfolio_core::DisplayMode;

/// Observable display mode. Created once by [`crate::App`] and handed down as a
/// prop; views reading it re-render when [`ThemeState::toggle`] runs.
#[derive(Debug, Clone, Copy)]
pub struct ThemeState {
    mode: RwSignal<DisplayMode>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            mode: RwSignal::new(DisplayMode::default()),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode.get()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    pub fn toggle(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
        log::debug!("Display mode is now {:?}", self.mode.get_untracked());
    }

    pub fn container_class(&self) -> String {
        self.mode().container_class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    #[test]
    fn test_initial_class_is_plain_app() {
        with_owner(|| {
            let theme = ThemeState::new();
            assert!(!theme.is_dark());
            assert_eq!(theme.container_class(), "app ");
        });
    }

    #[test]
    fn test_toggle_round_trip() {
        with_owner(|| {
            let theme = ThemeState::new();

            theme.toggle();
            assert!(theme.is_dark());
            assert!(theme.container_class().contains("dark-mode"));

            theme.toggle();
            assert!(!theme.is_dark());
            assert_eq!(theme.container_class(), "app ");
        });
    }

    #[test]
    fn test_copies_share_one_flag() {
        with_owner(|| {
            let theme = ThemeState::new();
            let header_copy = theme;

            header_copy.toggle();
            assert_eq!(theme.mode(), DisplayMode::Dark);
        });
    }
}
