/// Site colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Named CSS custom properties and their value in one palette.
pub type Palette = [(&'static str, &'static str); 6];

pub const DARK_PALETTE: Palette = [
    ("--primary-bg", "#0a0a0a"),
    ("--secondary-bg", "#1a1a1a"),
    ("--text-primary", "#ffffff"),
    ("--text-secondary", "#a0a0a0"),
    ("--glass-bg", "rgba(255, 255, 255, 0.02)"),
    ("--glass-border", "rgba(255, 255, 255, 0.08)"),
];

pub const LIGHT_PALETTE: Palette = [
    ("--primary-bg", "#f5f5f5"),
    ("--secondary-bg", "#ffffff"),
    ("--text-primary", "#000000"),
    ("--text-secondary", "#666666"),
    ("--glass-bg", "rgba(255, 255, 255, 0.7)"),
    ("--glass-border", "rgba(0, 0, 0, 0.1)"),
];

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK_PALETTE,
            Theme::Light => &LIGHT_PALETTE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}
