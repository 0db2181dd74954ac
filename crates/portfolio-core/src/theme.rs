//! Light/dark display mode and the container class derived from it

/// Class every page container carries.
pub const CONTAINER_CLASS: &str = "app";

/// Modifier appended to the container class in dark mode.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Presentation mode of the page. Starts light on every load and is never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn is_dark(self) -> bool {
        matches!(self, DisplayMode::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    /// Class token added to the container; empty in light mode.
    pub fn modifier(self) -> &'static str {
        match self {
            DisplayMode::Light => "",
            DisplayMode::Dark => DARK_MODE_CLASS,
        }
    }

    /// `"app "` followed by the modifier, so light mode keeps the trailing space.
    pub fn container_class(self) -> String {
        format!("{CONTAINER_CLASS} {}", self.modifier())
    }

    /// Glyph on the toggle button: the mode a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            DisplayMode::Light => "\u{1F319}",
            DisplayMode::Dark => "\u{2600}\u{FE0F}",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            DisplayMode::Light => "Switch to dark mode",
            DisplayMode::Dark => "Switch to light mode",
        }
    }
}
