//! Dark/light theme.
//!
//! A single flag drives every themed class on the page; each accessor is a
//! two-way branch on it.

/// Colour scheme of the page. Starts dark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Dark palette (default).
    #[default]
    Dark,
    /// Light palette.
    Light,
}

/// Glyph shown on the theme toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Offered while dark: switch to light.
    Sun,
    /// Offered while light: switch to dark.
    Moon,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Flip in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Whether the dark palette is active.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Page background and foreground.
    pub fn page_classes(self) -> &'static str {
        if self.is_dark() {
            "bg-gray-900 text-white"
        } else {
            "bg-white text-gray-900"
        }
    }

    /// Raised surfaces: expertise cards, timeline entries, project cards and
    /// form inputs.
    pub fn surface_classes(self) -> &'static str {
        if self.is_dark() { "bg-gray-800" } else { "bg-gray-100" }
    }

    /// Technology chips inside expertise cards.
    pub fn chip_classes(self) -> &'static str {
        if self.is_dark() { "bg-gray-700" } else { "bg-gray-200" }
    }

    /// Icon for the toggle button.
    pub fn toggle_icon(self) -> ToggleIcon {
        if self.is_dark() {
            ToggleIcon::Sun
        } else {
            ToggleIcon::Moon
        }
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self.toggle_icon() {
            ToggleIcon::Sun => "Switch to light mode",
            ToggleIcon::Moon => "Switch to dark mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn derived(theme: Theme) -> (&'static str, &'static str, &'static str, ToggleIcon) {
        (
            theme.page_classes(),
            theme.surface_classes(),
            theme.chip_classes(),
            theme.toggle_icon(),
        )
    }

    #[test]
    fn defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
        assert_eq!(Theme::default().toggle_icon(), ToggleIcon::Sun);
    }

    #[test]
    fn toggle_switches_every_derived_class() {
        let dark = derived(Theme::Dark);
        let light = derived(Theme::Dark.toggled());
        assert_ne!(dark.0, light.0);
        assert_ne!(dark.1, light.1);
        assert_ne!(dark.2, light.2);
        assert_ne!(dark.3, light.3);
        assert_eq!(light.0, "bg-white text-gray-900");
    }

    #[test]
    fn double_toggle_round_trips() {
        for start in [Theme::Dark, Theme::Light] {
            let mut theme = start;
            let before = derived(theme);
            theme.toggle();
            theme.toggle();
            assert_eq!(theme, start);
            assert_eq!(derived(theme), before);
        }
    }
}
