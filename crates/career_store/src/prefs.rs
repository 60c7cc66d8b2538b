use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interface language. Only the code is stored; translation happens elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
    Te,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Hi, Locale::Te];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Te => "te",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    /// HSL triple as consumed by the stylesheet, e.g. `"0 100% 60%"`.
    pub value: &'static str,
}

pub const THEME_COLORS: [NamedColor; 6] = [
    NamedColor { name: "red", value: "0 100% 60%" },
    NamedColor { name: "blue", value: "221 83% 53%" },
    NamedColor { name: "green", value: "142 76% 36%" },
    NamedColor { name: "purple", value: "262 83% 58%" },
    NamedColor { name: "teal", value: "173 58% 39%" },
    NamedColor { name: "orange", value: "24 95% 53%" },
];

pub fn theme_color_by_name(name: &str) -> Option<&'static NamedColor> {
    THEME_COLORS
        .iter()
        .find(|color| color.name.eq_ignore_ascii_case(name))
}

/// Accent color token. Any string is accepted; the palette only supplies
/// the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeColor(pub String);

impl ThemeColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Palette entry whose value matches this token, if any.
    pub fn palette_entry(&self) -> Option<&'static NamedColor> {
        THEME_COLORS.iter().find(|color| color.value == self.0)
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self(THEME_COLORS[0].value.to_owned())
    }
}

impl From<&NamedColor> for ThemeColor {
    fn from(color: &NamedColor) -> Self {
        Self(color.value.to_owned())
    }
}
