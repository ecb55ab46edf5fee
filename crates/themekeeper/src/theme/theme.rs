//! The two-valued theme enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseThemeError;

/// A visual theme: light or dark.
///
/// The string form (`"light"` / `"dark"`) is what gets persisted and what
/// the root attribute carries, so [`Display`](fmt::Display), [`FromStr`]
/// and serde all agree on it.
///
/// # Example
///
/// ```rust
/// use themekeeper::Theme;
///
/// let theme: Theme = "dark".parse().unwrap();
/// assert_eq!(theme.toggled(), Theme::Light);
/// assert_eq!(theme.to_string(), "dark");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Both themes, light first.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Maps a "prefers dark color scheme" flag to a theme.
    pub fn from_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The literal used in storage and in the root attribute.
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

impl FromStr for Theme {
    type Err = ParseThemeError;

    /// Accepts exactly `"light"` or `"dark"`. Case and whitespace are not
    /// normalised: the stored value is written by this crate and anything
    /// else is foreign data.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}
