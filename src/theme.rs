use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mascot::MascotKind;

/// Local storage key holding the persisted [`ThemeMode`].
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme mode: {0}")]
pub struct ParseThemeError(String);

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Space at night, ocean by day.
    pub fn mascot(self) -> MascotKind {
        match self {
            ThemeMode::Dark => MascotKind::Spaceship,
            ThemeMode::Light => MascotKind::Fish,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }

    /// Reads a persisted value, falling back to the default when the stored
    /// string is absent or unrecognised.
    pub fn from_stored(stored: Option<&str>) -> Self {
        stored.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    /// The value to write on first load so the key always holds a valid
    /// mode afterward. `None` when the stored value is already usable.
    pub fn repair_stored(stored: Option<&str>) -> Option<Self> {
        match stored.map(str::parse::<ThemeMode>) {
            Some(Ok(_)) => None,
            _ => Some(ThemeMode::default()),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => f.write_str("dark"),
            ThemeMode::Light => f.write_str("light"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Tailwind class sets for one theme.
#[derive(Debug)]
pub struct Palette {
    pub page: &'static str,
    pub section: &'static str,
    pub section_alt: &'static str,
    pub card: &'static str,
    pub heading: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub accent_bg: &'static str,
    pub accent_soft: &'static str,
    pub rule: &'static str,
    pub nav: &'static str,
    pub nav_link: &'static str,
    pub input: &'static str,
}

static DARK: Palette = Palette {
    page: "bg-gray-900 text-gray-100",
    section: "bg-gray-900/60",
    section_alt: "bg-gray-800/40",
    card: "bg-gray-800/80 border border-gray-700",
    heading: "text-white",
    text: "text-gray-300",
    muted: "text-gray-400",
    accent: "text-blue-400",
    accent_bg: "bg-blue-600 hover:bg-blue-500 text-white",
    accent_soft: "bg-blue-500/20 text-blue-300",
    rule: "bg-blue-500",
    nav: "bg-gray-900/80 shadow-blue-900/20",
    nav_link: "text-gray-300 hover:text-blue-400",
    input: "bg-gray-900 border-gray-600 text-gray-100 focus:ring-blue-500 focus:border-blue-500",
};

static LIGHT: Palette = Palette {
    page: "bg-sky-50 text-gray-800",
    section: "bg-white/70",
    section_alt: "bg-sky-50/70",
    card: "bg-white border border-sky-100",
    heading: "text-gray-800",
    text: "text-gray-600",
    muted: "text-gray-500",
    accent: "text-indigo-600",
    accent_bg: "bg-indigo-600 hover:bg-indigo-700 text-white",
    accent_soft: "bg-indigo-100 text-indigo-800",
    rule: "bg-indigo-600",
    nav: "bg-white/80",
    nav_link: "text-gray-700 hover:text-indigo-600",
    input: "bg-white border-gray-300 text-black focus:ring-indigo-500 focus:border-indigo-500",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_string() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let stored = mode.to_string();
            assert_eq!(stored.parse::<ThemeMode>(), Ok(mode));
            assert_eq!(ThemeMode::from_stored(Some(&stored)), mode);
        }
    }

    #[test]
    fn test_defaults_to_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("sepia")), ThemeMode::Dark);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_first_load_repairs_missing_or_bad_key() {
        assert_eq!(ThemeMode::repair_stored(None), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::repair_stored(Some("sepia")), Some(ThemeMode::Dark));
        // a returning visitor's preference is never overwritten
        assert_eq!(ThemeMode::repair_stored(Some("light")), None);
        assert_eq!(ThemeMode::repair_stored(Some("dark")), None);
    }

    #[test]
    fn test_toggle_switches_mascot_and_palette() {
        let dark = ThemeMode::Dark;
        let light = dark.toggled();
        assert_eq!(light, ThemeMode::Light);
        assert_eq!(light.toggled(), dark);

        assert_eq!(dark.mascot(), MascotKind::Spaceship);
        assert_eq!(light.mascot(), MascotKind::Fish);
        assert_ne!(dark.palette().page, light.palette().page);
    }
}
